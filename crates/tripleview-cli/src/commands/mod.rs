//! CLI command implementations

pub mod completions;
pub mod config;
pub mod find;
pub mod node;
pub mod overview;
pub mod query;
pub mod repl;
pub mod stats;
