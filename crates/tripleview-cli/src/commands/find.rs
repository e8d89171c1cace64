//! Node search command

use clap::Args;

use crate::output::{hits_table, to_json, OutputFormat};
use crate::AppContext;
use tripleview_core::{limits::validate_limit, overview};
use tripleview_search::{ExactNodeSearch, NodeSearchEngine};

#[derive(Args)]
pub struct FindArgs {
    /// Text to look for in node names
    pub text: String,

    /// Enable fuzzy matching
    #[arg(long)]
    pub fuzzy: bool,

    /// Limit results
    #[arg(short, long, default_value = "20")]
    pub limit: usize,

    /// Number of leading triples to search
    #[arg(long)]
    pub sample: Option<usize>,
}

#[cfg(feature = "fuzzy")]
fn engine(fuzzy: bool) -> Box<dyn NodeSearchEngine> {
    if fuzzy {
        Box::new(tripleview_search::FuzzyNodeSearch::new())
    } else {
        Box::new(ExactNodeSearch::new())
    }
}

#[cfg(not(feature = "fuzzy"))]
fn engine(fuzzy: bool) -> Box<dyn NodeSearchEngine> {
    if fuzzy {
        tracing::warn!("Fuzzy search not enabled, falling back to exact search");
    }
    Box::new(ExactNodeSearch::new())
}

pub async fn run(args: &FindArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let sample = args.sample.unwrap_or(ctx.config.overview_limit);
    validate_limit(sample)?;

    let dataset = ctx.require_dataset().await?;
    let graph = overview(dataset.triples(), sample);
    let hits = engine(args.fuzzy).search(&args.text, &graph.nodes, args.limit);

    tracing::info!("Node search returned {} results", hits.len());

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&hits)?),
        OutputFormat::Table => print!("{}", hits_table(&args.text, &hits)),
    }

    Ok(())
}
