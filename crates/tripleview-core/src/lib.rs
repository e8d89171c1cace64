//! Tripleview Core - Query engine for knowledge graph triples
//!
//! This crate provides the triple data model, the pattern query parser,
//! the filter/projection step that turns triples into a renderable graph,
//! and the session state driven by user query submissions.

pub mod error;
pub mod limits;
pub mod projection;
pub mod query;
pub mod session;
pub mod stats;
pub mod triple;

pub use error::{Error, Result};
pub use projection::{
    execute, filter_and_project, overview, Edge, GraphProjection, Node, NodeDetails, NodeGroup,
    QueryOutcome,
};
pub use query::{parse, Condition, ParseError, ParseErrorKind, ParsedQuery};
pub use session::{Dataset, DatasetState, QuerySession};
pub use stats::GraphStats;
pub use triple::{Field, Triple};
