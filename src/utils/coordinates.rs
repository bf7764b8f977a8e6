/// Quantization applied to one coordinate axis when deriving a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantizeMode {
    /// Snap to the nearest multiple of `1/precision`.
    Round,
    /// Snap down to the largest multiple of `1/precision` not exceeding the value.
    Floor,
}

/// A pair of quantization modes: one for latitude, one for longitude.
pub type KeyVariant = (QuantizeMode, QuantizeMode);

/// Quantize a coordinate to the grid defined by `precision`.
///
/// A precision of 100 000 keeps five decimal digits (~1m at the equator).
pub fn quantize(value: f64, precision: f64, mode: QuantizeMode) -> f64 {
    let scaled = value * precision;
    let snapped = match mode {
        QuantizeMode::Round => scaled.round(),
        QuantizeMode::Floor => scaled.floor(),
    };
    snapped / precision
}

/// Build the lookup key for a position at the given precision.
///
/// Pure function: identical inputs always produce an identical key.
///
/// # Examples
/// ```
/// use dewetra_reconciler::utils::coordinates::{coordinate_key, QuantizeMode};
///
/// let variant = (QuantizeMode::Round, QuantizeMode::Floor);
/// let key = coordinate_key(45.12345, 9.54321, 100_000.0, variant);
/// assert_eq!(key, "45.12345:9.54321");
/// ```
pub fn coordinate_key(lat: f64, lon: f64, precision: f64, variant: KeyVariant) -> String {
    let (lat_mode, lon_mode) = variant;
    format!(
        "{}:{}",
        quantize(lat, precision, lat_mode),
        quantize(lon, precision, lon_mode)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_round() {
        assert_eq!(quantize(45.12346, 10_000.0, QuantizeMode::Round), 45.1235);
        assert_eq!(quantize(45.12342, 10_000.0, QuantizeMode::Round), 45.1234);
    }

    #[test]
    fn test_quantize_floor() {
        assert_eq!(quantize(9.54327, 10_000.0, QuantizeMode::Floor), 9.5432);
        assert_eq!(quantize(-0.12346, 10_000.0, QuantizeMode::Floor), -0.1235);
    }

    #[test]
    fn test_key_is_deterministic() {
        let variant = (QuantizeMode::Round, QuantizeMode::Floor);
        let a = coordinate_key(44.40004, 8.90007, 10_000.0, variant);
        let b = coordinate_key(44.40004, 8.90007, 10_000.0, variant);
        assert_eq!(a, b);
        assert_eq!(a, "44.4:8.9");
    }

    #[test]
    fn test_key_trims_integral_values() {
        let variant = (QuantizeMode::Round, QuantizeMode::Round);
        assert_eq!(coordinate_key(45.0, 9.0, 100.0, variant), "45:9");
    }

    #[test]
    fn test_variants_diverge_near_grid_edges() {
        // 9.54325 sits just above the 1e4 half-quantum, so round and
        // floor land on different grid lines.
        let round = quantize(9.54325, 10_000.0, QuantizeMode::Round);
        let floor = quantize(9.54325, 10_000.0, QuantizeMode::Floor);
        assert_eq!(round, 9.5433);
        assert_eq!(floor, 9.5432);
    }
}
