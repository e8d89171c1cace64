//! JSON file dataset source

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tripleview_core::Triple;

use crate::error::{DatasetError, DatasetResult};
use crate::traits::DatasetSource;

/// Reads a JSON array of triples from disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetSource for JsonFileSource {
    async fn load(&self) -> DatasetResult<Vec<Triple>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DatasetError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let triples: Vec<Triple> = serde_json::from_slice(&bytes)?;
        tracing::debug!("Decoded {} triples from {:?}", triples.len(), self.path);
        Ok(triples)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
