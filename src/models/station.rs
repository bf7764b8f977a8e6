use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// A station from the canonical registry (`stations.json`).
///
/// `dewetra_ids` maps an instrument-class name to the Dewetra sensor
/// identifier attached during enrichment. It is empty on load unless a
/// previous run's output is fed back in.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Station {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Latitude")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[serde(rename = "Neighborhood", default)]
    pub neighborhood: String,

    #[serde(rename = "dewetraIDS", default)]
    pub dewetra_ids: BTreeMap<String, String>,
}

impl Station {
    pub fn new(id: String, latitude: f64, longitude: f64, neighborhood: String) -> Self {
        Self {
            id,
            latitude,
            longitude,
            neighborhood,
            dewetra_ids: BTreeMap::new(),
        }
    }

    /// Whether any sensor identifier has been attached to this station.
    pub fn has_sensors(&self) -> bool {
        !self.dewetra_ids.is_empty()
    }
}

/// A station from the secondary European list (`euro-stations.json`).
///
/// Carries no geographic data we use; only the ID is cross-checked
/// against the canonical registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EuroStation {
    #[serde(rename = "ID")]
    pub id: String,
}
