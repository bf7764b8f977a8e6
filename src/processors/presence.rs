use crate::models::{EuroStation, Station};
use std::collections::{HashMap, HashSet};

/// Outcome of cross-checking the canonical registry against the
/// secondary European list. Purely diagnostic; never gates enrichment.
#[derive(Debug, Clone, Default)]
pub struct PresenceReport {
    /// IDs present in both lists.
    pub matched: HashSet<String>,
    /// IDs present only in the canonical registry, sorted.
    pub solo_canonical: Vec<String>,
    /// IDs present only in the secondary list, sorted.
    pub solo_secondary: Vec<String>,
    pub canonical_total: usize,
    pub secondary_total: usize,
}

impl PresenceReport {
    pub fn is_consistent(&self) -> bool {
        self.solo_canonical.is_empty() && self.solo_secondary.is_empty()
    }

    /// Generate a summary report
    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Presence Check Report ===\n");
        summary.push_str(&format!("Canonical stations: {}\n", self.canonical_total));
        summary.push_str(&format!("Secondary stations: {}\n", self.secondary_total));
        summary.push_str(&format!("Present in both: {}\n", self.matched.len()));

        if !self.solo_secondary.is_empty() {
            summary.push_str(&format!(
                "\nSolo in secondary set: {}\n",
                self.solo_secondary.len()
            ));
            for id in &self.solo_secondary {
                summary.push_str(&format!("  {}\n", id));
            }
        }

        if !self.solo_canonical.is_empty() {
            summary.push_str(&format!(
                "\nSolo in canonical set: {}\n",
                self.solo_canonical.len()
            ));
            for id in &self.solo_canonical {
                summary.push_str(&format!("  {}\n", id));
            }
        }

        if self.is_consistent() {
            summary.push_str("\nStation ID spaces agree\n");
        }

        summary
    }
}

/// Cross-checks the two station lists by ID.
pub struct PresenceChecker;

impl PresenceChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check every secondary station against the canonical registry and
    /// every canonical station against the matched set.
    ///
    /// Every secondary ID either matches exactly one canonical station
    /// or is reported unmatched; every canonical station is counted
    /// exactly once.
    pub fn check(
        &self,
        stations: &HashMap<String, Station>,
        euro_stations: &[EuroStation],
    ) -> PresenceReport {
        let mut report = PresenceReport {
            canonical_total: stations.len(),
            secondary_total: euro_stations.len(),
            ..PresenceReport::default()
        };

        for euro in euro_stations {
            if stations.contains_key(&euro.id) {
                report.matched.insert(euro.id.clone());
            } else {
                report.solo_secondary.push(euro.id.clone());
            }
        }

        for id in stations.keys() {
            if !report.matched.contains(id) {
                report.solo_canonical.push(id.clone());
            }
        }

        report.solo_secondary.sort();
        report.solo_canonical.sort();

        report
    }
}

impl Default for PresenceChecker {
    fn default() -> Self {
        Self::new()
    }
}
