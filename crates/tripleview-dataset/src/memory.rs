//! In-memory dataset source for testing

use async_trait::async_trait;
use tripleview_core::Triple;

use crate::error::DatasetResult;
use crate::traits::DatasetSource;

/// Serves a fixed triple collection
///
/// Useful for testing and for embedding a dataset in the binary.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    triples: Vec<Triple>,
}

impl MemorySource {
    pub fn new(triples: Vec<Triple>) -> Self {
        Self { triples }
    }
}

#[async_trait]
impl DatasetSource for MemorySource {
    async fn load(&self) -> DatasetResult<Vec<Triple>> {
        Ok(self.triples.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} triples)", self.triples.len())
    }
}
