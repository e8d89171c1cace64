//! Tripleview CLI - Query and explore knowledge graph triples

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, find, node, overview, query, repl, stats};
use config::Config;
use output::OutputFormat;
use tripleview_core::{Dataset, DatasetState};

#[derive(Parser)]
#[command(name = "tripleview")]
#[command(author, version, about = "Query and explore knowledge graph triples")]
pub struct Cli {
    /// Dataset file path or URL (JSON array of triples)
    #[arg(short, long, env = "TRIPLEVIEW_DATASET", global = true)]
    pub dataset: Option<String>,

    /// Output format: table, json
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a pattern query, e.g. MATCH (s)-[p]->(o) WHERE s = "microgravity"
    Query(query::QueryArgs),
    /// Print the unfiltered overview graph
    Overview(overview::OverviewArgs),
    /// Show dataset statistics
    Stats,
    /// Inspect a node and its connections
    Node(node::NodeArgs),
    /// Search nodes by name
    Find(find::FindArgs),
    /// Interactive query session
    Repl(repl::ReplArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with resolved settings
pub struct AppContext {
    pub config: Config,
    pub dataset_location: String,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli) -> Self {
        let config = Config::load();
        let dataset_location = cli
            .dataset
            .clone()
            .unwrap_or_else(|| config.dataset.clone());
        let format = OutputFormat::from(cli.format.as_deref().unwrap_or(&config.format));

        Self {
            config,
            dataset_location,
            format,
        }
    }

    /// Load the dataset once; Ctrl-C abandons the load
    pub async fn load_dataset(&self) -> DatasetState {
        let source = match tripleview_dataset::open_source(&self.dataset_location) {
            Ok(source) => source,
            Err(e) => return DatasetState::failed(e.to_string()),
        };
        tracing::debug!("Loading dataset from {}", source.describe());

        tripleview_dataset::load_cancellable(source.as_ref(), interrupted()).await
    }

    /// Load the dataset or fail with the dataset banner
    pub async fn require_dataset(&self) -> anyhow::Result<Dataset> {
        match self.load_dataset().await {
            DatasetState::Ready(dataset) => Ok(dataset),
            state => anyhow::bail!(state
                .banner()
                .unwrap_or_else(|| "Dataset not loaded".to_string())),
        }
    }
}

/// Resolves on the next Ctrl-C.
///
/// Once a listener has been polled the default SIGINT action is gone for
/// the rest of the process, so anything that keeps running afterwards must
/// watch this itself.
pub async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::debug!("Ctrl-C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting tripleview CLI");

    let ctx = AppContext::new(&cli);

    match &cli.command {
        Commands::Query(args) => query::run(args, &ctx).await?,
        Commands::Overview(args) => overview::run(args, &ctx).await?,
        Commands::Stats => stats::run(&ctx).await?,
        Commands::Node(args) => node::run(args, &ctx).await?,
        Commands::Find(args) => find::run(args, &ctx).await?,
        Commands::Repl(args) => repl::run(args, &ctx).await?,
        Commands::Config(args) => commands::config::run(args).await?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}
