//! Query session state
//!
//! A session holds the loaded dataset plus the state of the most recent
//! query submission. Each submission replaces that state wholesale.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::limits::{validate_limit, DEFAULT_RESULT_LIMIT};
use crate::projection::{execute, GraphProjection, QueryOutcome};
use crate::query::{parse, ParseError, ParsedQuery};
use crate::triple::Triple;

/// Immutable, shareable triple collection
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    triples: Arc<Vec<Triple>>,
}

impl Dataset {
    pub fn new(triples: Vec<Triple>) -> Self {
        Self {
            triples: Arc::new(triples),
        }
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl From<Vec<Triple>> for Dataset {
    fn from(triples: Vec<Triple>) -> Self {
        Self::new(triples)
    }
}

/// Lifecycle of the one-time dataset load
#[derive(Debug, Clone, Default)]
pub enum DatasetState {
    #[default]
    Loading,
    Ready(Dataset),
    Failed {
        reason: String,
    },
    Cancelled,
}

impl DatasetState {
    pub fn ready(triples: Vec<Triple>) -> Self {
        Self::Ready(Dataset::new(triples))
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            Self::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }

    /// Loaded triples, or an empty slice when no data is available
    pub fn triples(&self) -> &[Triple] {
        self.dataset().map(Dataset::triples).unwrap_or(&[])
    }

    pub fn error(&self) -> Option<Error> {
        match self {
            Self::Failed { reason } => Some(Error::DatasetLoad(reason.clone())),
            Self::Cancelled => Some(Error::DatasetLoad("load cancelled".to_string())),
            Self::Loading | Self::Ready(_) => None,
        }
    }

    /// Persistent message shown while no data can be queried
    pub fn banner(&self) -> Option<String> {
        self.error().map(|e| e.to_string())
    }
}

/// State of the query box: last query text, last results, last error
#[derive(Debug, Clone)]
pub struct QuerySession {
    dataset: DatasetState,
    limit: usize,
    query: String,
    outcome: QueryOutcome,
    error: Option<String>,
}

impl QuerySession {
    pub fn new(dataset: DatasetState) -> Self {
        Self {
            dataset,
            limit: DEFAULT_RESULT_LIMIT,
            query: String::new(),
            outcome: QueryOutcome::default(),
            error: None,
        }
    }

    /// Use a custom result limit
    pub fn with_limit(mut self, limit: usize) -> Result<Self> {
        validate_limit(limit)?;
        self.limit = limit;
        Ok(self)
    }

    /// Replace the dataset once a load completes; current results are kept
    pub fn set_dataset(&mut self, dataset: DatasetState) {
        if let Some(banner) = dataset.banner() {
            tracing::debug!("{}", banner);
        }
        self.dataset = dataset;
    }

    /// Submit a query.
    ///
    /// A blank query clears results without error. A rejected query records
    /// its message and leaves the previous results in place.
    pub fn run(&mut self, query: &str) -> std::result::Result<&QueryOutcome, ParseError> {
        self.error = None;
        self.query = query.to_string();

        let parsed = match parse(query) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!("Rejected query {:?}: {}", query, e);
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        if let ParsedQuery::Where(condition) = &parsed {
            tracing::info!("Running query where {}", condition);
        }

        self.outcome = execute(self.dataset.triples(), &parsed, self.limit);
        Ok(&self.outcome)
    }

    /// Wipe results and any query error immediately
    pub fn clear(&mut self) {
        self.query.clear();
        self.outcome = QueryOutcome::default();
        self.error = None;
    }

    pub fn dataset(&self) -> &DatasetState {
        &self.dataset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn outcome(&self) -> &QueryOutcome {
        &self.outcome
    }

    pub fn results(&self) -> &[Triple] {
        &self.outcome.results
    }

    pub fn graph(&self) -> &GraphProjection {
        &self.outcome.graph
    }

    /// Message of the last rejected query
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dataset load failure message, independent of query errors
    pub fn banner(&self) -> Option<String> {
        self.dataset.banner()
    }
}
