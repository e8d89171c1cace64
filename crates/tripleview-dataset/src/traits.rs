//! Dataset source trait definitions

use async_trait::async_trait;
use tripleview_core::Triple;

use crate::error::DatasetResult;

/// A place the triple document can be loaded from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Load and decode every triple in the document
    async fn load(&self) -> DatasetResult<Vec<Triple>>;

    /// Human-readable location, used in log lines
    fn describe(&self) -> String;
}
