use anyhow::{bail, Context, Result};
use clap::Parser;
use statictree::batch::{run_batch, BatchOptions};
use statictree::NodeIndex;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Reads a weighted tree followed by distance queries and prints the tree's
/// diameter and the answer to every query.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// File to read the tree and queries from. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Node to root the tree at, 1-indexed.
    #[arg(long, value_name = "NODE")]
    root: Option<usize>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let root = match args.root {
        Some(0) => bail!("--root is 1-indexed, 0 is not a valid node"),
        Some(node) => Some(
            NodeIndex::try_from(node - 1).with_context(|| format!("Invalid root node {node}"))?,
        ),
        None => None,
    };
    let options = BatchOptions { root };

    let output = BufWriter::new(io::stdout().lock());
    match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading batch input");
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            run_batch(BufReader::new(file), output, &options)
                .with_context(|| format!("Failed to process {}", path.display()))?;
        }
        None => {
            run_batch(io::stdin().lock(), output, &options)
                .context("Failed to process standard input")?;
        }
    }
    Ok(())
}

/// Logs to stderr, filtered by `STATICTREE_LOG` (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("STATICTREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}
