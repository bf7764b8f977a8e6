use crate::error::{ReconcileError, Result};
use crate::models::{EuroStation, Station};
use crate::utils::constants::{DATASET_EXTENSION, EURO_STATIONS_FILE, STATIONS_FILE};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Loads the two station registries from the data directory.
///
/// A missing or malformed file is fatal: this is a one-shot offline
/// tool, so the operator fixes the inputs and re-runs.
pub struct RegistryReader {
    data_dir: PathBuf,
}

impl RegistryReader {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Read the canonical station registry, keyed by station ID.
    pub fn read_stations(&self) -> Result<HashMap<String, Station>> {
        let stations: HashMap<String, Station> =
            serde_json::from_reader(self.open_dataset(STATIONS_FILE)?)?;

        for station in stations.values() {
            station.validate()?;
        }

        Ok(stations)
    }

    /// Read the secondary European station list.
    pub fn read_euro_stations(&self) -> Result<Vec<EuroStation>> {
        let stations: Vec<EuroStation> =
            serde_json::from_reader(self.open_dataset(EURO_STATIONS_FILE)?)?;

        Ok(stations)
    }

    fn open_dataset(&self, name: &str) -> Result<BufReader<File>> {
        let path = self.dataset_path(name);
        if !path.exists() {
            return Err(ReconcileError::DatasetNotFound {
                name: name.to_string(),
                path,
            });
        }

        Ok(BufReader::new(File::open(path)?))
    }

    fn dataset_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", name, DATASET_EXTENSION))
    }
}
