//! Exact node search - case-insensitive substring matching

use tripleview_core::Node;

use crate::traits::{NodeHit, NodeSearchEngine};

/// Substring search over node ids (stateless)
pub struct ExactNodeSearch;

impl ExactNodeSearch {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExactNodeSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeSearchEngine for ExactNodeSearch {
    fn search(&self, text: &str, nodes: &[Node], limit: usize) -> Vec<NodeHit> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        nodes
            .iter()
            .filter(|n| n.id.to_lowercase().contains(&needle))
            .take(limit)
            .map(|n| NodeHit::new(n, 0))
            .collect()
    }
}
