use crate::models::{EuroStation, SensorClass, SensorRecord, Station};
use crate::processors::CoordinateIndex;
use crate::utils::constants::{KEY_VARIANTS, MATCH_PRECISIONS};
use crate::utils::coordinates::coordinate_key;
use std::collections::btree_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Two different sensor identifiers resolved to the same station slot.
#[derive(Debug, Clone)]
pub struct DuplicateConflict {
    pub class: SensorClass,
    pub key: String,
    pub station_id: String,
    pub existing_id: String,
    pub incoming_id: String,
}

/// Statistics for one instrument-class pass.
#[derive(Debug, Clone)]
pub struct ClassOutcome {
    pub class: SensorClass,
    pub sensors: usize,
    pub matched: usize,
    pub attached: usize,
    pub unmatched: usize,
    pub duplicates: Vec<DuplicateConflict>,
}

/// Aggregated outcome of all class passes.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentReport {
    pub classes: Vec<ClassOutcome>,
    pub index_collisions: usize,
}

impl EnrichmentReport {
    pub fn duplicate_count(&self) -> usize {
        self.classes.iter().map(|c| c.duplicates.len()).sum()
    }

    /// Generate a summary report, re-verifying the secondary list
    /// against the enriched registry.
    pub fn generate_summary(
        &self,
        stations: &HashMap<String, Station>,
        euro_stations: &[EuroStation],
    ) -> String {
        let mut summary = String::new();

        summary.push_str("=== Enrichment Report ===\n");
        for outcome in &self.classes {
            summary.push_str(&format!(
                "{} ({}): {} sensors, {} matched, {} attached, {} conflicts, {} unmatched\n",
                outcome.class,
                outcome.class.description(),
                outcome.sensors,
                outcome.matched,
                outcome.attached,
                outcome.duplicates.len(),
                outcome.unmatched
            ));
        }

        for outcome in &self.classes {
            for conflict in &outcome.duplicates {
                summary.push_str(&format!(
                    "duplicated by coord {} at {}: {} vs {}\n",
                    conflict.class, conflict.key, conflict.existing_id, conflict.incoming_id
                ));
            }
        }

        let mut missing: Vec<&str> = Vec::new();
        let mut without_sensors: Vec<&str> = Vec::new();
        for euro in euro_stations {
            match stations.get(&euro.id) {
                None => missing.push(&euro.id),
                Some(station) if !station.has_sensors() => without_sensors.push(&euro.id),
                Some(_) => {}
            }
        }
        missing.sort_unstable();
        without_sensors.sort_unstable();

        for id in &missing {
            summary.push_str(&format!("secondary station not in registry: {}\n", id));
        }
        for id in &without_sensors {
            summary.push_str(&format!("no sensors attached: {}\n", id));
        }

        let with_sensors = stations.values().filter(|s| s.has_sensors()).count();

        summary.push_str(&format!(
            "\nStations without sensors: {}\n",
            stations.len() - with_sensors
        ));
        summary.push_str(&format!("Stations with sensors: {}\n", with_sensors));
        summary.push_str(&format!("Total stations: {}\n", stations.len()));
        summary.push_str(&format!("Total secondary stations: {}\n", euro_stations.len()));
        summary.push_str(&format!("Duplicate conflicts: {}\n", self.duplicate_count()));
        summary.push_str(&format!("Index collisions: {}\n", self.index_collisions));

        summary
    }
}

/// Attaches sensor identifiers to stations by approximate coordinate match.
pub struct Enricher {
    index: CoordinateIndex,
}

impl Enricher {
    pub fn new(index: CoordinateIndex) -> Self {
        Self { index }
    }

    /// Run one instrument-class pass over the station map.
    pub fn enrich_class(
        &self,
        stations: &mut HashMap<String, Station>,
        class: SensorClass,
        sensors: &[SensorRecord],
    ) -> ClassOutcome {
        let mut outcome = ClassOutcome {
            class,
            sensors: sensors.len(),
            matched: 0,
            attached: 0,
            unmatched: 0,
            duplicates: Vec::new(),
        };

        for sensor in sensors {
            let Some((key, station_id)) = self.locate(sensor) else {
                outcome.unmatched += 1;
                continue;
            };
            outcome.matched += 1;

            let station = stations
                .get_mut(&station_id)
                .expect("index refers to a station missing from the registry");

            match station.dewetra_ids.entry(class.dataset_name().to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(sensor.id.clone());
                    outcome.attached += 1;
                }
                Entry::Occupied(slot) => {
                    if slot.get() != &sensor.id {
                        // Keep the first-assigned identifier.
                        warn!(
                            class = %class,
                            key = %key,
                            existing = %slot.get(),
                            incoming = %sensor.id,
                            "duplicated by coord"
                        );
                        outcome.duplicates.push(DuplicateConflict {
                            class,
                            key,
                            station_id: station.id.clone(),
                            existing_id: slot.get().clone(),
                            incoming_id: sensor.id.clone(),
                        });
                    }
                }
            }
        }

        outcome
    }

    /// Cascade search: precisions finest first, and at each precision
    /// the key variants in their fixed order. The first key that hits
    /// the index stops the whole cascade.
    fn locate(&self, sensor: &SensorRecord) -> Option<(String, String)> {
        for precision in MATCH_PRECISIONS {
            for variant in KEY_VARIANTS {
                let key = coordinate_key(sensor.lat, sensor.lon, precision, variant);
                if let Some(station_id) = self.index.lookup(&key) {
                    return Some((key, station_id.to_string()));
                }
                debug!(
                    key = %key,
                    precision,
                    station_name = %sensor.station_name,
                    "not found"
                );
            }
        }

        None
    }
}
