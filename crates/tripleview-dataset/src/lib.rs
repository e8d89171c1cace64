//! Tripleview Dataset - Loading the triple document
//!
//! The dataset is read once per session from a JSON array of triples and
//! handed to the query engine as an immutable collection.

pub mod error;
pub mod json;
pub mod loader;
pub mod memory;
pub mod traits;

#[cfg(feature = "http")]
pub mod http;

pub use error::{DatasetError, DatasetResult};
pub use json::JsonFileSource;
pub use loader::{load, load_cancellable, open_source};
pub use memory::MemorySource;
pub use traits::DatasetSource;

#[cfg(feature = "http")]
pub use http::HttpSource;
