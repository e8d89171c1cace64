//! Node inspection command

use clap::Args;
use serde::Serialize;

use crate::output::{node_table, to_json, OutputFormat};
use crate::AppContext;
use tripleview_core::{limits::validate_limit, overview, GraphProjection, NodeDetails};

#[derive(Args)]
pub struct NodeArgs {
    /// Exact node id (case-sensitive)
    pub id: String,

    /// Number of leading triples to search
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct NodeReport {
    details: NodeDetails,
    neighborhood: GraphProjection,
}

pub async fn run(args: &NodeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.overview_limit);
    validate_limit(limit)?;

    let dataset = ctx.require_dataset().await?;
    let graph = overview(dataset.triples(), limit);

    let (Some(details), Some(neighborhood)) =
        (graph.node_details(&args.id), graph.neighborhood(&args.id))
    else {
        anyhow::bail!("Node not found: {}", args.id);
    };

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            to_json(&NodeReport {
                details,
                neighborhood
            })?
        ),
        OutputFormat::Table => print!("{}", node_table(&details, &neighborhood)),
    }

    Ok(())
}
