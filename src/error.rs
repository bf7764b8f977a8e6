use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReconcileError>;

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset '{name}' not found at {path}")]
    DatasetNotFound { name: String, path: PathBuf },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Coordinate key '{key}' maps to both station {first} and station {second}")]
    IndexCollision {
        key: String,
        first: String,
        second: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
