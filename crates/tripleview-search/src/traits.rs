//! Node search traits

use serde::Serialize;
use tripleview_core::{Node, NodeGroup};

/// A node matched by a search, with its engine-specific score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeHit {
    pub id: String,
    pub group: NodeGroup,
    pub score: u32,
}

impl NodeHit {
    pub fn new(node: &Node, score: u32) -> Self {
        Self {
            id: node.id.clone(),
            group: node.group,
            score,
        }
    }
}

/// Trait for node search engines
pub trait NodeSearchEngine: Send + Sync {
    /// Return at most `limit` nodes matching `text`, best first
    fn search(&self, text: &str, nodes: &[Node], limit: usize) -> Vec<NodeHit>;
}
