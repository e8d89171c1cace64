//! Fuzzy node search using nucleo

use nucleo_matcher::{
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
    Config, Matcher, Utf32Str,
};
use tripleview_core::Node;

use crate::traits::{NodeHit, NodeSearchEngine};

/// Stateless fuzzy search engine using nucleo
pub struct FuzzyNodeSearch;

impl FuzzyNodeSearch {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FuzzyNodeSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeSearchEngine for FuzzyNodeSearch {
    fn search(&self, text: &str, nodes: &[Node], limit: usize) -> Vec<NodeHit> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::new(
            text,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let mut hits: Vec<NodeHit> = nodes
            .iter()
            .filter_map(|node| {
                pattern
                    .score(Utf32Str::new(&node.id, &mut buf), &mut matcher)
                    .map(|score| NodeHit::new(node, score))
            })
            .collect();

        // Stable sort keeps projection order among equal scores
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(limit);

        tracing::debug!("Fuzzy search for {:?} matched {} nodes", text, hits.len());
        hits
    }
}
