//! Filtering triples and projecting them into a renderable graph

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::query::{Condition, ParsedQuery};
use crate::triple::Triple;

/// How a node was first discovered while building a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum NodeGroup {
    /// First seen as a subject (serialized as `1`)
    Subject,
    /// First seen as an object (serialized as `2`)
    Object,
}

impl From<NodeGroup> for u8 {
    fn from(group: NodeGroup) -> Self {
        match group {
            NodeGroup::Subject => 1,
            NodeGroup::Object => 2,
        }
    }
}

impl TryFrom<u8> for NodeGroup {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Subject),
            2 => Ok(Self::Object),
            other => Err(format!("Unknown node group: {}", other)),
        }
    }
}

/// A graph node; identity is the exact entity string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub group: NodeGroup,
}

/// A directed edge labelled with the triple's predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Subject node id
    pub source: String,

    /// Object node id
    pub target: String,

    pub predicate: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Nodes and links handed to a force-directed renderer.
///
/// Every link endpoint is the id of a node in `nodes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphProjection {
    pub nodes: Vec<Node>,
    pub links: Vec<Edge>,
}

/// Connection counts for a single node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDetails {
    pub id: String,
    pub group: NodeGroup,
    pub out_degree: usize,
    pub in_degree: usize,
    pub degree: usize,
}

/// Insertion-ordered node set keyed by id; the first group assigned wins
#[derive(Debug, Default)]
struct NodeIndex {
    nodes: Vec<Node>,
    seen: HashSet<String>,
}

impl NodeIndex {
    fn insert(&mut self, id: &str, group: NodeGroup) {
        if !self.seen.insert(id.to_string()) {
            return;
        }
        self.nodes.push(Node {
            id: id.to_string(),
            group,
        });
    }

    fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl GraphProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a projection from triples in iteration order, skipping malformed ones
    pub fn from_triples<'a, I>(triples: I) -> Self
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        let mut index = NodeIndex::default();
        let mut links = Vec::new();
        let mut skipped = 0usize;

        for triple in triples {
            if !triple.is_well_formed() {
                skipped += 1;
                continue;
            }

            index.insert(&triple.subject, NodeGroup::Subject);
            index.insert(&triple.object, NodeGroup::Object);

            links.push(Edge {
                source: triple.subject.clone(),
                target: triple.object.clone(),
                predicate: triple.predicate.clone(),
                title: triple.title.clone(),
            });
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} malformed triples while projecting", skipped);
        }

        Self {
            nodes: index.into_nodes(),
            links,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    /// Look up a node by exact id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The node, its incident links and the nodes on their other ends
    pub fn neighborhood(&self, id: &str) -> Option<GraphProjection> {
        self.node(id)?;

        let links: Vec<Edge> = self
            .links
            .iter()
            .filter(|l| l.source == id || l.target == id)
            .cloned()
            .collect();

        let mut adjacent: HashSet<&str> = HashSet::with_capacity(links.len() + 1);
        adjacent.insert(id);
        for link in &links {
            adjacent.insert(&link.source);
            adjacent.insert(&link.target);
        }

        let nodes = self
            .nodes
            .iter()
            .filter(|n| adjacent.contains(n.id.as_str()))
            .cloned()
            .collect();

        Some(GraphProjection { nodes, links })
    }

    /// Degree counts for a node
    pub fn node_details(&self, id: &str) -> Option<NodeDetails> {
        let node = self.node(id)?;
        let out_degree = self.links.iter().filter(|l| l.source == id).count();
        let in_degree = self.links.iter().filter(|l| l.target == id).count();

        Some(NodeDetails {
            id: node.id.clone(),
            group: node.group,
            out_degree,
            in_degree,
            degree: out_degree + in_degree,
        })
    }
}

/// Result of one query submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub results: Vec<Triple>,
    pub graph: GraphProjection,
}

impl QueryOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Apply an optional condition, keep the first `limit` matches in
/// collection order, and project them.
pub fn filter_and_project(
    triples: &[Triple],
    condition: Option<&Condition>,
    limit: usize,
) -> QueryOutcome {
    let results: Vec<Triple> = match condition {
        Some(condition) => {
            let needle = condition.value.to_lowercase();
            triples
                .iter()
                .filter(|t| t.field(condition.field).to_lowercase() == needle)
                .take(limit)
                .cloned()
                .collect()
        }
        None => triples.iter().take(limit).cloned().collect(),
    };

    let graph = GraphProjection::from_triples(&results);

    tracing::debug!(
        "Query returned {} triples ({} nodes, {} links)",
        results.len(),
        graph.nodes.len(),
        graph.links.len()
    );

    QueryOutcome { results, graph }
}

/// Run a parsed query; an empty query yields an empty outcome
pub fn execute(triples: &[Triple], query: &ParsedQuery, limit: usize) -> QueryOutcome {
    match query {
        ParsedQuery::Empty => QueryOutcome::default(),
        ParsedQuery::All => filter_and_project(triples, None, limit),
        ParsedQuery::Where(condition) => filter_and_project(triples, Some(condition), limit),
    }
}

/// Unfiltered projection of the first `limit` triples
pub fn overview(triples: &[Triple], limit: usize) -> GraphProjection {
    GraphProjection::from_triples(triples.iter().take(limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::DEFAULT_RESULT_LIMIT;
    use crate::query::parse;
    use crate::triple::Field;

    fn node(id: &str, group: NodeGroup) -> Node {
        Node {
            id: id.to_string(),
            group,
        }
    }

    fn numbered(count: usize) -> Vec<Triple> {
        (0..count)
            .map(|i| Triple::new(format!("s{}", i % 7), "rel", format!("o{}", i)))
            .collect()
    }

    #[test]
    fn test_end_to_end_query() {
        let triples = vec![
            Triple::new("microgravity", "affects", "bone density"),
            Triple::new("radiation", "damages", "DNA"),
        ];
        let query = parse(r#"MATCH (s)-[p]->(o) WHERE s = "microgravity""#).unwrap();
        let outcome = execute(&triples, &query, DEFAULT_RESULT_LIMIT);

        assert_eq!(outcome.results, vec![triples[0].clone()]);
        assert_eq!(
            outcome.graph.nodes,
            vec![
                node("microgravity", NodeGroup::Subject),
                node("bone density", NodeGroup::Object)
            ]
        );
        assert_eq!(
            outcome.graph.links,
            vec![Edge {
                source: "microgravity".to_string(),
                target: "bone density".to_string(),
                predicate: "affects".to_string(),
                title: None,
            }]
        );
    }

    #[test]
    fn test_no_condition_passes_everything_through_limit() {
        let triples = numbered(250);
        let outcome = filter_and_project(&triples, None, DEFAULT_RESULT_LIMIT);

        assert_eq!(outcome.results.len(), DEFAULT_RESULT_LIMIT);
        assert_eq!(outcome.results, triples[..DEFAULT_RESULT_LIMIT].to_vec());
    }

    #[test]
    fn test_limit_keeps_collection_order_of_matches() {
        let triples = numbered(1000);
        let condition = Condition::new(Field::Subject, "S3");
        let outcome = filter_and_project(&triples, Some(&condition), DEFAULT_RESULT_LIMIT);

        let expected: Vec<Triple> = triples
            .iter()
            .filter(|t| t.subject == "s3")
            .take(DEFAULT_RESULT_LIMIT)
            .cloned()
            .collect();
        assert_eq!(outcome.results.len(), DEFAULT_RESULT_LIMIT);
        assert_eq!(outcome.results, expected);
    }

    #[test]
    fn test_match_is_exact_not_substring() {
        let triples = vec![
            Triple::new("COVID-19", "causes", "fever"),
            Triple::new("COVID-19 variant", "causes", "cough"),
        ];
        let condition = Condition::new(Field::Subject, "covid-19");
        let outcome = filter_and_project(&triples, Some(&condition), 10);

        assert_eq!(outcome.results, vec![triples[0].clone()]);
    }

    #[test]
    fn test_filters_on_predicate_and_object() {
        let triples = vec![
            Triple::new("microgravity", "affects", "bone density"),
            Triple::new("radiation", "damages", "DNA"),
            Triple::new("spaceflight", "Affects", "dna"),
        ];

        let by_predicate = Condition::new(Field::Predicate, "affects");
        let outcome = filter_and_project(&triples, Some(&by_predicate), 10);
        assert_eq!(outcome.results.len(), 2);

        let by_object = Condition::new(Field::Object, "DNA");
        let outcome = filter_and_project(&triples, Some(&by_object), 10);
        assert_eq!(outcome.results, vec![triples[1].clone(), triples[2].clone()]);
    }

    #[test]
    fn test_first_seen_group_wins() {
        let triples = vec![Triple::new("A", "p1", "B"), Triple::new("B", "p2", "A")];
        let graph = GraphProjection::from_triples(&triples);

        assert_eq!(
            graph.nodes,
            vec![node("A", NodeGroup::Subject), node("B", NodeGroup::Object)]
        );
        assert_eq!(graph.links.len(), 2);
    }

    #[test]
    fn test_malformed_triple_counted_but_not_projected() {
        let triples = vec![
            Triple::new("radiation", "damages", ""),
            Triple::new("radiation", "damages", "DNA"),
        ];
        let condition = Condition::new(Field::Subject, "radiation");
        let outcome = filter_and_project(&triples, Some(&condition), 10);

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.graph.links.len(), 1);
        assert_eq!(
            outcome.graph.nodes,
            vec![node("radiation", NodeGroup::Subject), node("DNA", NodeGroup::Object)]
        );
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let triples = vec![
            Triple::new("radiation", "damages", "DNA"),
            Triple::new("radiation", "mutates", "DNA"),
            Triple::new("radiation", "damages", "DNA"),
        ];
        let graph = GraphProjection::from_triples(&triples);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.links.len(), 3);
    }

    #[test]
    fn test_node_identity_is_case_sensitive() {
        let triples = vec![
            Triple::new("Radiation", "damages", "DNA"),
            Triple::new("radiation", "damages", "DNA"),
        ];
        let condition = Condition::new(Field::Subject, "RADIATION");
        let outcome = filter_and_project(&triples, Some(&condition), 10);

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.graph.nodes.len(), 3);
    }

    #[test]
    fn test_link_endpoints_always_resolve() {
        let mut triples = numbered(300);
        triples.push(Triple::new("", "rel", "orphan"));
        triples.push(Triple::new("x", "", "y"));
        let graph = overview(&triples, triples.len());

        for link in &graph.links {
            assert!(graph.node(&link.source).is_some());
            assert!(graph.node(&link.target).is_some());
        }
        assert!(graph.node("orphan").is_none());
    }

    #[test]
    fn test_edge_carries_title() {
        let triples = vec![Triple::new("a", "b", "c").with_title("Paper")];
        let graph = GraphProjection::from_triples(&triples);
        assert_eq!(graph.links[0].title.as_deref(), Some("Paper"));
    }

    #[test]
    fn test_empty_query_outcome() {
        let triples = numbered(5);
        let outcome = execute(&triples, &ParsedQuery::Empty, 10);
        assert!(outcome.is_empty());
        assert!(outcome.graph.is_empty());
    }

    #[test]
    fn test_overview_samples_prefix() {
        let triples = numbered(50);
        let graph = overview(&triples, 10);
        assert_eq!(graph.links.len(), 10);
        assert_eq!(graph.links[9].target, "o9");
    }

    #[test]
    fn test_neighborhood() {
        let triples = vec![
            Triple::new("microgravity", "affects", "bone density"),
            Triple::new("radiation", "damages", "DNA"),
            Triple::new("spaceflight", "involves", "microgravity"),
        ];
        let graph = GraphProjection::from_triples(&triples);
        let hood = graph.neighborhood("microgravity").unwrap();

        let ids: Vec<&str> = hood.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["microgravity", "bone density", "spaceflight"]);
        assert_eq!(hood.links.len(), 2);
        assert!(graph.neighborhood("gravity").is_none());
    }

    #[test]
    fn test_neighborhood_in_large_overview() {
        let mut triples = numbered(2000);
        triples.push(Triple::new("o5", "loops", "o5"));
        let graph = overview(&triples, triples.len());
        let hood = graph.neighborhood("s3").unwrap();

        let degree = graph.node_details("s3").unwrap().degree;
        assert_eq!(hood.links.len(), degree);
        assert_eq!(hood.nodes.len(), degree + 1);
        assert_eq!(hood.nodes[0].id, "s3");

        let self_loop = graph.neighborhood("o5").unwrap();
        let ids: Vec<&str> = self_loop.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["s5", "o5"]);
        assert_eq!(self_loop.links.len(), 2);
    }

    #[test]
    fn test_node_details() {
        let triples = vec![
            Triple::new("microgravity", "affects", "bone density"),
            Triple::new("microgravity", "affects", "muscle mass"),
            Triple::new("spaceflight", "involves", "microgravity"),
        ];
        let graph = GraphProjection::from_triples(&triples);
        let details = graph.node_details("microgravity").unwrap();

        assert_eq!(details.group, NodeGroup::Subject);
        assert_eq!(details.out_degree, 2);
        assert_eq!(details.in_degree, 1);
        assert_eq!(details.degree, 3);
    }

    #[test]
    fn test_projection_json_shape() {
        let triples = vec![Triple::new("radiation", "damages", "DNA")];
        let graph = GraphProjection::from_triples(&triples);
        let json = serde_json::to_value(&graph).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "nodes": [
                    {"id": "radiation", "group": 1},
                    {"id": "DNA", "group": 2}
                ],
                "links": [
                    {"source": "radiation", "target": "DNA", "predicate": "damages"}
                ]
            })
        );
    }
}
