pub mod constants;
pub mod coordinates;
pub mod progress;

pub use constants::*;
pub use coordinates::{coordinate_key, quantize, KeyVariant, QuantizeMode};
pub use progress::ProgressReporter;
