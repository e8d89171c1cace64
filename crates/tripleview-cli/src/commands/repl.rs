//! Interactive query session
//!
//! Each input line is one query submission. Lines starting with `:` are
//! session commands. Ctrl-C or end of input leaves the session.

use std::future::Future;
use std::io::Write;

use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::output::{graph_summary, stats_table, to_json, triples_table, OutputFormat};
use crate::{interrupted, AppContext};
use tripleview_core::{DatasetState, GraphStats, QuerySession};

const HELP: &str = r#"Enter a query such as:
  MATCH (s)-[p]->(o) WHERE s = "microgravity"
An empty line clears the results.

Commands:
  :clear   clear results and errors
  :graph   print the current graph projection as JSON
  :stats   show dataset statistics
  :help    show this help
  :quit    exit (Ctrl-C also works)"#;

/// Conventional status for a process ended by SIGINT
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Args)]
pub struct ReplArgs {
    /// Maximum triples returned per query
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Why the input loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Quit,
    EndOfInput,
    Interrupted,
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(b"> ")?;
    stdout.flush()
}

fn render(session: &QuerySession, format: OutputFormat) -> anyhow::Result<()> {
    if let Some(banner) = session.banner() {
        println!("! {}", banner);
    }
    if let Some(error) = session.error() {
        println!("Error: {}", error);
    }
    match format {
        OutputFormat::Json => println!("{}", to_json(session.outcome())?),
        OutputFormat::Table => {
            print!("{}", triples_table(session.results()));
            println!("{}", graph_summary(session.graph()));
        }
    }
    Ok(())
}

/// Handle one input line; `false` ends the session
fn handle_line(
    session: &mut QuerySession,
    line: &str,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    match line.trim() {
        ":quit" | ":q" | ":exit" => return Ok(false),
        ":help" => println!("{}", HELP),
        ":clear" => {
            session.clear();
            println!("Cleared.");
        }
        ":graph" => println!("{}", to_json(session.graph())?),
        ":stats" => {
            let stats = GraphStats::compute(session.dataset().triples());
            match format {
                OutputFormat::Json => println!("{}", to_json(&stats)?),
                OutputFormat::Table => print!("{}", stats_table(&stats)),
            }
        }
        _ => {
            // Rejected queries are rendered with the previous results
            let _ = session.run(line);
            render(session, format)?;
        }
    }
    Ok(true)
}

/// Read lines until `:quit`, end of input, or `interrupt` resolves
async fn read_loop<R, I>(
    session: &mut QuerySession,
    input: R,
    interrupt: I,
    format: OutputFormat,
) -> anyhow::Result<Exit>
where
    R: AsyncBufRead + Unpin,
    I: Future<Output = ()>,
{
    let mut lines = input.lines();
    tokio::pin!(interrupt);

    loop {
        prompt()?;
        let line = tokio::select! {
            biased;
            _ = &mut interrupt => return Ok(Exit::Interrupted),
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            return Ok(Exit::EndOfInput);
        };
        if !handle_line(session, &line, format)? {
            return Ok(Exit::Quit);
        }
    }
}

pub async fn run(args: &ReplArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.limit);
    let mut session = QuerySession::new(DatasetState::Loading).with_limit(limit)?;

    eprintln!("Loading dataset from {}...", ctx.dataset_location);
    session.set_dataset(ctx.load_dataset().await);
    match session.dataset() {
        DatasetState::Ready(dataset) => {
            eprintln!("Loaded {} triples. Type :help for help.", dataset.len())
        }
        _ => {
            if let Some(banner) = session.banner() {
                println!("! {}", banner);
            }
        }
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let exit = read_loop(&mut session, stdin, interrupted(), ctx.format).await?;
    tracing::debug!("Leaving interactive session ({:?})", exit);

    if exit == Exit::Interrupted {
        println!();
        // The pending stdin read cannot be cancelled and would hold the
        // runtime open on shutdown
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }
    Ok(())
}
