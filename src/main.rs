use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cfsearch::{find_violation, CfsIndex, IndexConfig};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cfsearch", about = "Cache-friendly search layout for sorted integers")]
struct Cli {
    /// Log construction details (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the CFS layout of a sorted list of integers.
    Layout {
        /// Input file (whitespace-separated integers).
        input: PathBuf,
        /// Sort the input instead of rejecting unsorted data.
        #[arg(long)]
        sort: bool,
    },
    /// Build an index and report lower/higher bounds for each key.
    Query {
        /// Input file (whitespace-separated integers).
        input: PathBuf,
        /// Keys to look up.
        #[arg(long = "key", required = true, allow_negative_numbers = true)]
        keys: Vec<i64>,
        /// Sort the input instead of rejecting unsorted data.
        #[arg(long)]
        sort: bool,
    },
    /// Check that a file already holds a valid CFS layout.
    Validate {
        /// Layout file (whitespace-separated integers in array order).
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Layout { input, sort } => run_layout(&input, sort)?,
        Commands::Query { input, keys, sort } => run_query(&input, &keys, sort)?,
        Commands::Validate { input } => run_validate(&input)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

fn run_layout(input: &Path, sort: bool) -> Result<()> {
    let index = load_index(input, sort)?;
    println!("{}", join(index.as_slice()));
    Ok(())
}

fn run_query(input: &Path, keys: &[i64], sort: bool) -> Result<()> {
    let index = load_index(input, sort)?;

    for key in keys {
        let (lower, higher) = index.equal_range(key);
        println!(
            "key={}\tlower={}\tvalue={}\thigher={}\tvalue={}\tcount={}",
            key,
            render_position(&index, lower),
            render_value(&index, lower),
            render_position(&index, higher),
            render_value(&index, higher),
            index.count(key)
        );
    }

    Ok(())
}

fn run_validate(input: &Path) -> Result<()> {
    let values = read_integers(input)?;
    match find_violation(&values) {
        Some(position) => bail!(
            "invalid layout: element {} at position {} breaks the ordering invariant",
            values[position],
            position
        ),
        None => {
            println!("valid layout ({} elements)", values.len());
            Ok(())
        }
    }
}

fn load_index(input: &Path, sort: bool) -> Result<CfsIndex<i64>> {
    let values = read_integers(input)?;
    if sort {
        return Ok(CfsIndex::from_unsorted(values));
    }
    CfsIndex::build(values, &IndexConfig::default())
        .with_context(|| format!("cannot build index from {}", input.display()))
}

fn read_integers(path: &Path) -> Result<Vec<i64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let values = contents
        .split_whitespace()
        .enumerate()
        .map(|(idx, token)| {
            token.parse::<i64>().with_context(|| {
                format!("invalid integer '{}' (value {}) in {}", token, idx + 1, path.display())
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(path = %path.display(), len = values.len(), "read input");
    if values.is_empty() {
        info!(path = %path.display(), "input is empty");
    }
    Ok(values)
}

fn render_position(index: &CfsIndex<i64>, position: usize) -> String {
    if position == index.len() {
        "end".to_string()
    } else {
        position.to_string()
    }
}

fn render_value(index: &CfsIndex<i64>, position: usize) -> String {
    index
        .get(position)
        .map_or_else(|| "-".to_string(), |value| value.to_string())
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
