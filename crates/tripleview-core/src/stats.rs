//! Dataset statistics

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::triple::Triple;

/// Summary counts over a triple collection.
///
/// Entities are counted by a normalized key (lower-cased, trimmed), so
/// these numbers can be smaller than the node count of a projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Total triples in the collection
    pub triples: usize,

    /// Triples missing a subject, predicate or object
    pub malformed: usize,

    /// Triples flagged as verified
    pub verified: usize,

    /// Distinct entities across well-formed triples
    pub nodes: usize,

    /// Well-formed triples
    pub edges: usize,

    /// Distinct subjects
    pub subjects: usize,

    /// Distinct objects
    pub objects: usize,
}

fn normalize(entity: &str) -> String {
    entity.trim().to_lowercase()
}

impl GraphStats {
    pub fn compute(triples: &[Triple]) -> Self {
        let mut nodes = HashSet::new();
        let mut subjects = HashSet::new();
        let mut objects = HashSet::new();
        let mut stats = Self {
            triples: triples.len(),
            ..Default::default()
        };

        for triple in triples {
            if triple.faiss_verified == Some(true) {
                stats.verified += 1;
            }
            if !triple.subject.is_empty() {
                subjects.insert(normalize(&triple.subject));
            }
            if !triple.object.is_empty() {
                objects.insert(normalize(&triple.object));
            }

            if !triple.is_well_formed() {
                stats.malformed += 1;
                continue;
            }
            stats.edges += 1;
            nodes.insert(normalize(&triple.subject));
            nodes.insert(normalize(&triple.object));
        }

        stats.nodes = nodes.len();
        stats.subjects = subjects.len();
        stats.objects = objects.len();
        stats
    }
}
