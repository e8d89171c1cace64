//! Dataset error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for dataset operations
pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

/// Dataset-specific error types
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Unsupported dataset location: {0}")]
    UnsupportedLocation(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for DatasetError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}
