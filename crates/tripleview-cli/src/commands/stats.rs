//! Stats command

use crate::output::{stats_table, to_json, OutputFormat};
use crate::AppContext;
use tripleview_core::GraphStats;

pub async fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let dataset = ctx.require_dataset().await?;
    let stats = GraphStats::compute(dataset.triples());

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&stats)?),
        OutputFormat::Table => {
            println!("Dataset: {}", ctx.dataset_location);
            print!("{}", stats_table(&stats));
        }
    }

    Ok(())
}
