//! Error types for Tripleview Core

use thiserror::Error;

use crate::limits::ValidationError;
use crate::query::ParseError;

/// Result type alias using Tripleview's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Tripleview error types
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to load triples dataset: {0}")]
    DatasetLoad(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
