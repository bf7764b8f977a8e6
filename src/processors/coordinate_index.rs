use crate::error::{ReconcileError, Result};
use crate::models::Station;
use crate::utils::constants::{INDEX_PRECISION, KEY_VARIANTS};
use crate::utils::coordinates::coordinate_key;
use std::collections::HashMap;
use tracing::warn;

/// What to do when two stations quantize to the same coordinate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Last station wins; the collision is recorded and reported.
    #[default]
    LogOverwrite,
    /// First station wins; the collision is recorded and reported.
    KeepFirst,
    /// Abort the run naming the colliding key and both station IDs.
    Reject,
}

/// One index collision: two stations sharing a quantized key.
#[derive(Debug, Clone)]
pub struct CollisionRecord {
    pub key: String,
    pub kept: String,
    pub displaced: String,
}

/// Lookup table from a quantized coordinate key to a canonical station ID.
///
/// Built once over the full registry at `INDEX_PRECISION` with the same
/// key variant the enricher tries first; never rebuilt. The station map
/// remains the single owner of station objects.
pub struct CoordinateIndex {
    entries: HashMap<String, String>,
    collisions: Vec<CollisionRecord>,
}

impl CoordinateIndex {
    /// Build the index over all canonical stations.
    ///
    /// Stations are inserted in ID order so collision outcomes do not
    /// depend on hash-map iteration order.
    pub fn build(stations: &HashMap<String, Station>, policy: CollisionPolicy) -> Result<Self> {
        let mut entries: HashMap<String, String> = HashMap::with_capacity(stations.len());
        let mut collisions = Vec::new();

        let mut ids: Vec<&String> = stations.keys().collect();
        ids.sort();

        for id in ids {
            let station = &stations[id];
            let key = coordinate_key(
                station.latitude,
                station.longitude,
                INDEX_PRECISION,
                KEY_VARIANTS[0],
            );

            match entries.get(&key) {
                None => {
                    entries.insert(key, station.id.clone());
                }
                Some(existing) => {
                    let existing = existing.clone();
                    match policy {
                        CollisionPolicy::Reject => {
                            return Err(ReconcileError::IndexCollision {
                                key,
                                first: existing,
                                second: station.id.clone(),
                            });
                        }
                        CollisionPolicy::KeepFirst => {
                            warn!(key = %key, kept = %existing, displaced = %station.id,
                                "coordinate collision, keeping first station");
                            collisions.push(CollisionRecord {
                                key,
                                kept: existing,
                                displaced: station.id.clone(),
                            });
                        }
                        CollisionPolicy::LogOverwrite => {
                            warn!(key = %key, kept = %station.id, displaced = %existing,
                                "coordinate collision, overwriting with later station");
                            collisions.push(CollisionRecord {
                                key: key.clone(),
                                kept: station.id.clone(),
                                displaced: existing,
                            });
                            entries.insert(key, station.id.clone());
                        }
                    }
                }
            }
        }

        Ok(Self {
            entries,
            collisions,
        })
    }

    /// Look up the station ID indexed under a quantized key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn collisions(&self) -> &[CollisionRecord] {
        &self.collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station_map(defs: &[(&str, f64, f64)]) -> HashMap<String, Station> {
        defs
            .iter()
            .map(|(id, lat, lon)| {
                (
                    id.to_string(),
                    Station::new(id.to_string(), *lat, *lon, String::new()),
                )
            })
            .collect()
    }

    #[test]
    fn test_build_and_lookup() {
        let stations = station_map(&[("a", 45.12345, 9.54321), ("b", 44.4, 8.9)]);
        let index = CoordinateIndex::build(&stations, CollisionPolicy::default()).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("45.12345:9.54321"), Some("a"));
        assert_eq!(index.lookup("44.4:8.9"), Some("b"));
        assert_eq!(index.lookup("10:10"), None);
        assert!(index.collisions().is_empty());
    }

    #[test]
    fn test_log_overwrite_keeps_last() {
        let stations = station_map(&[("a", 44.4, 8.9), ("z", 44.4, 8.9)]);
        let index = CoordinateIndex::build(&stations, CollisionPolicy::LogOverwrite).unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("44.4:8.9"), Some("z"));
        assert_eq!(index.collisions().len(), 1);
        assert_eq!(index.collisions()[0].kept, "z");
        assert_eq!(index.collisions()[0].displaced, "a");
    }

    #[test]
    fn test_keep_first_keeps_first() {
        let stations = station_map(&[("a", 44.4, 8.9), ("z", 44.4, 8.9)]);
        let index = CoordinateIndex::build(&stations, CollisionPolicy::KeepFirst).unwrap();

        assert_eq!(index.lookup("44.4:8.9"), Some("a"));
        assert_eq!(index.collisions().len(), 1);
    }

    #[test]
    fn test_reject_aborts() {
        let stations = station_map(&[("a", 44.4, 8.9), ("z", 44.4, 8.9)]);

        assert!(matches!(
            CoordinateIndex::build(&stations, CollisionPolicy::Reject),
            Err(ReconcileError::IndexCollision { .. })
        ));
    }

    #[test]
    fn test_nearby_stations_do_not_collide_at_index_precision() {
        // Fifth-decimal difference survives quantization at 1e5.
        let stations = station_map(&[("a", 45.12345, 9.54321), ("b", 45.12346, 9.54321)]);
        let index = CoordinateIndex::build(&stations, CollisionPolicy::Reject).unwrap();

        assert_eq!(index.len(), 2);
    }
}
