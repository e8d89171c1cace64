//! One-shot dataset loading

use std::future::Future;

use tripleview_core::DatasetState;

use crate::error::DatasetResult;
#[cfg(not(feature = "http"))]
use crate::error::DatasetError;
use crate::json::JsonFileSource;
use crate::traits::DatasetSource;

/// Pick a source for a dataset location: URLs go over HTTP, anything else
/// is a file path.
pub fn open_source(location: &str) -> DatasetResult<Box<dyn DatasetSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        #[cfg(feature = "http")]
        {
            return Ok(Box::new(crate::http::HttpSource::new(location)?));
        }
        #[cfg(not(feature = "http"))]
        {
            return Err(DatasetError::UnsupportedLocation(format!(
                "{} (built without the http feature)",
                location
            )));
        }
    }

    Ok(Box::new(JsonFileSource::new(location)))
}

/// Load a source into a dataset state; failures yield `Failed`, never a
/// partial collection.
pub async fn load<S>(source: &S) -> DatasetState
where
    S: DatasetSource + ?Sized,
{
    match source.load().await {
        Ok(triples) => {
            tracing::info!("Loaded {} triples from {}", triples.len(), source.describe());
            DatasetState::ready(triples)
        }
        Err(e) => {
            tracing::warn!("Failed to load dataset from {}: {}", source.describe(), e);
            DatasetState::failed(e.to_string())
        }
    }
}

/// Like [`load`], but abandons the load as soon as `cancel` resolves
pub async fn load_cancellable<S, C>(source: &S, cancel: C) -> DatasetState
where
    S: DatasetSource + ?Sized,
    C: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = cancel => {
            tracing::info!("Dataset load from {} cancelled", source.describe());
            DatasetState::Cancelled
        }
        state = load(source) => state,
    }
}
