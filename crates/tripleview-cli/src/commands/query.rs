//! Query command

use clap::Args;

use crate::output::{graph_summary, to_json, triples_table, OutputFormat};
use crate::AppContext;
use tripleview_core::{DatasetState, QuerySession};

#[derive(Args)]
pub struct QueryArgs {
    /// Pattern query, e.g. MATCH (s)-[p]->(o) WHERE s = "microgravity"
    pub query: String,

    /// Maximum triples returned
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print only the graph projection
    #[arg(long)]
    pub graph_only: bool,
}

pub async fn run(args: &QueryArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.limit);
    let dataset = ctx.require_dataset().await?;
    let mut session = QuerySession::new(DatasetState::Ready(dataset)).with_limit(limit)?;

    let outcome = match session.run(&args.query) {
        Ok(outcome) => outcome,
        Err(e) => anyhow::bail!("{}", e),
    };

    tracing::info!("Query returned {} results", outcome.results.len());

    match (ctx.format, args.graph_only) {
        (OutputFormat::Json, true) => println!("{}", to_json(&outcome.graph)?),
        (OutputFormat::Json, false) => println!("{}", to_json(outcome)?),
        (OutputFormat::Table, graph_only) => {
            if !graph_only {
                print!("{}", triples_table(&outcome.results));
            }
            println!("{}", graph_summary(&outcome.graph));
        }
    }

    Ok(())
}
