//! Output formatting utilities

use std::fmt::Write;

use serde::Serialize;
use tripleview_core::{GraphProjection, GraphStats, NodeDetails, NodeGroup, Triple};
use tripleview_search::NodeHit;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Pretty JSON for any serializable value
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

fn group_label(group: NodeGroup) -> &'static str {
    match group {
        NodeGroup::Subject => "subject",
        NodeGroup::Object => "object",
    }
}

/// Numbered triple listing, mirroring the results panel
pub fn triples_table(triples: &[Triple]) -> String {
    let mut out = format!("Results ({}):\n", triples.len());
    if triples.is_empty() {
        out.push_str("  No results found.\n");
        return out;
    }
    for (i, t) in triples.iter().enumerate() {
        let _ = writeln!(out, "  {:>3}. {} -[{}]-> {}", i + 1, t.subject, t.predicate, t.object);
        if let Some(title) = &t.title {
            let _ = writeln!(out, "       from: {}", title);
        }
    }
    out
}

/// One-line summary of a projection
pub fn graph_summary(graph: &GraphProjection) -> String {
    format!("Graph: {} nodes, {} links", graph.nodes.len(), graph.links.len())
}

/// Node and link listing of a projection
pub fn graph_table(graph: &GraphProjection) -> String {
    let mut out = graph_summary(graph);
    out.push('\n');
    for node in &graph.nodes {
        let _ = writeln!(out, "  [{}] {}", group_label(node.group), node.id);
    }
    for link in &graph.links {
        let _ = writeln!(out, "  {} -[{}]-> {}", link.source, link.predicate, link.target);
    }
    out
}

pub fn stats_table(stats: &GraphStats) -> String {
    let rows = [
        ("Triples", stats.triples),
        ("Malformed", stats.malformed),
        ("Verified", stats.verified),
        ("Nodes", stats.nodes),
        ("Edges", stats.edges),
        ("Subjects", stats.subjects),
        ("Objects", stats.objects),
    ];
    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{:<10} {:>8}", label, value);
    }
    out
}

pub fn node_table(details: &NodeDetails, neighborhood: &GraphProjection) -> String {
    let mut out = format!(
        "{} ({}), connections: {} ({} out, {} in)\n",
        details.id,
        group_label(details.group),
        details.degree,
        details.out_degree,
        details.in_degree
    );
    for link in &neighborhood.links {
        if link.source == details.id {
            let _ = writeln!(out, "  -> {} ({})", link.target, link.predicate);
        } else {
            let _ = writeln!(out, "  <- {} ({})", link.source, link.predicate);
        }
    }
    out
}

pub fn hits_table(text: &str, hits: &[NodeHit]) -> String {
    if hits.is_empty() {
        return format!("No nodes found for '{}'\n", text);
    }
    let mut out = format!("Nodes matching '{}' ({} found):\n", text, hits.len());
    for hit in hits {
        let _ = writeln!(out, "  {} ({})", hit.id, group_label(hit.group));
    }
    out
}
