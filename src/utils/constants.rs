use crate::utils::coordinates::{KeyVariant, QuantizeMode};

/// File names
pub const STATIONS_FILE: &str = "stations";
pub const EURO_STATIONS_FILE: &str = "euro-stations";
pub const DATASET_EXTENSION: &str = "json";

/// Precision used when indexing station coordinates (~1m resolution)
pub const INDEX_PRECISION: f64 = 100_000.0;

/// Precisions tried when matching a sensor to a station, finest first
pub const MATCH_PRECISIONS: [f64; 5] = [1_000_000.0, 100_000.0, 10_000.0, 1_000.0, 100.0];

/// Key variants tried at each precision, in order. The first entry is
/// also the variant the index itself is built with.
pub const KEY_VARIANTS: [KeyVariant; 4] = [
    (QuantizeMode::Round, QuantizeMode::Floor),
    (QuantizeMode::Round, QuantizeMode::Round),
    (QuantizeMode::Floor, QuantizeMode::Round),
    (QuantizeMode::Floor, QuantizeMode::Floor),
];

/// Geographic bounds
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;
