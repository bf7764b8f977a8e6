use crate::error::{ReconcileError, Result};
use crate::models::{SensorClass, SensorRecord};
use crate::utils::constants::DATASET_EXTENSION;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Loads the per-class Dewetra sensor registry files.
pub struct SensorReader {
    data_dir: PathBuf,
}

impl SensorReader {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Read the registry for one instrument class.
    ///
    /// Rows with out-of-range coordinates are dropped with a warning;
    /// the registry files are third-party downloads and occasionally
    /// carry junk rows that would poison coordinate matching.
    pub fn read_class(&self, class: SensorClass) -> Result<Vec<SensorRecord>> {
        let path = self
            .data_dir
            .join(format!("{}.{}", class.dataset_name(), DATASET_EXTENSION));

        if !path.exists() {
            return Err(ReconcileError::DatasetNotFound {
                name: class.dataset_name().to_string(),
                path,
            });
        }

        let sensors: Vec<SensorRecord> =
            serde_json::from_reader(BufReader::new(File::open(path)?))?;

        let mut valid = Vec::with_capacity(sensors.len());
        for sensor in sensors {
            if sensor.has_valid_position() {
                valid.push(sensor);
            } else {
                warn!(
                    class = %class,
                    sensor_id = %sensor.id,
                    lat = sensor.lat,
                    lon = sensor.lon,
                    "dropping sensor with out-of-range position"
                );
            }
        }

        Ok(valid)
    }
}
