use crate::utils::constants::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five Dewetra instrument classes, in the order they are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorClass {
    Anemometro,
    DirezioneVento,
    Igrometro,
    Pluviometro,
    Termometro,
}

impl SensorClass {
    pub const ALL: [SensorClass; 5] = [
        SensorClass::Anemometro,
        SensorClass::DirezioneVento,
        SensorClass::Igrometro,
        SensorClass::Pluviometro,
        SensorClass::Termometro,
    ];

    /// Dataset name: both the registry file stem and the key the sensor
    /// identifier is attached under.
    pub fn dataset_name(&self) -> &'static str {
        match self {
            SensorClass::Anemometro => "ANEMOMETRO",
            SensorClass::DirezioneVento => "DIREZIONEVENTO",
            SensorClass::Igrometro => "IGROMETRO",
            SensorClass::Pluviometro => "PLUVIOMETRO",
            SensorClass::Termometro => "TERMOMETRO",
        }
    }

    /// The measured quantity, for report text.
    pub fn description(&self) -> &'static str {
        match self {
            SensorClass::Anemometro => "wind speed",
            SensorClass::DirezioneVento => "wind direction",
            SensorClass::Igrometro => "relative humidity",
            SensorClass::Pluviometro => "precipitation",
            SensorClass::Termometro => "temperature",
        }
    }
}

impl fmt::Display for SensorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dataset_name())
    }
}

/// One sensor from a Dewetra per-class registry file.
///
/// `station_name` is informational only; matching goes purely by
/// coordinates. Extra fields in the registry files are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorRecord {
    pub id: String,

    pub lat: f64,

    pub lon: f64,

    #[serde(rename = "stationName", default)]
    pub station_name: String,
}

impl SensorRecord {
    pub fn new(id: String, lat: f64, lon: f64, station_name: String) -> Self {
        Self {
            id,
            lat,
            lon,
            station_name,
        }
    }

    /// Registry files are third-party downloads and occasionally carry
    /// junk rows; anything outside geographic bounds is unusable.
    pub fn has_valid_position(&self) -> bool {
        (MIN_LAT..=MAX_LAT).contains(&self.lat) && (MIN_LON..=MAX_LON).contains(&self.lon)
    }
}
