//! Tripleview Search - Finding nodes in a graph projection
//!
//! Provides exact (substring) search and fuzzy search (nucleo).

pub mod exact;
pub mod traits;

#[cfg(feature = "fuzzy")]
pub mod fuzzy;

pub use exact::ExactNodeSearch;
pub use traits::{NodeHit, NodeSearchEngine};

#[cfg(feature = "fuzzy")]
pub use fuzzy::FuzzyNodeSearch;
