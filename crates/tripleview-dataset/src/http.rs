//! HTTP dataset source

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tripleview_core::Triple;

use crate::error::DatasetResult;
use crate::traits::DatasetSource;

/// Fetches the triple document from a URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> DatasetResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self::with_client(url, client))
    }

    /// Use a preconfigured client (proxy, TLS or timeout settings)
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn load(&self) -> DatasetResult<Vec<Triple>> {
        tracing::debug!("Fetching dataset from {}", self.url);

        let triples: Vec<Triple> = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(triples)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
