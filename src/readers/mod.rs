pub mod registry_reader;
pub mod sensor_reader;

pub use registry_reader::RegistryReader;
pub use sensor_reader::SensorReader;
