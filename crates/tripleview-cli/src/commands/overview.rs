//! Overview graph command

use clap::Args;

use crate::output::{graph_table, to_json, OutputFormat};
use crate::AppContext;
use tripleview_core::{limits::validate_limit, overview};

#[derive(Args)]
pub struct OverviewArgs {
    /// Number of leading triples to project
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub async fn run(args: &OverviewArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.overview_limit);
    validate_limit(limit)?;

    let dataset = ctx.require_dataset().await?;
    let graph = overview(dataset.triples(), limit);

    tracing::info!(
        "Overview of {} triples: {} nodes, {} links",
        limit.min(dataset.len()),
        graph.nodes.len(),
        graph.links.len()
    );

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&graph)?),
        OutputFormat::Table => print!("{}", graph_table(&graph)),
    }

    Ok(())
}
