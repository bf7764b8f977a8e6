pub mod sensor;
pub mod station;

pub use sensor::{SensorClass, SensorRecord};
pub use station::{EuroStation, Station};
