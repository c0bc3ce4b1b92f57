//! Stdlens CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stdlens_indexer::IndexerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "stdlens")]
#[command(about = "Symbol catalogue and fuzzy lookup for standard-library archives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Indexer config file (ignored if missing)
    #[arg(short, long, global = true, default_value = "stdlens.toml")]
    config: PathBuf,

    /// Search path to index, as an OS path list (defaults to $CLASSPATH)
    #[arg(short, long, global = true)]
    search_path: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every symbol whose source text contains the query
    Search {
        #[arg(default_value = "class")]
        query: String,
    },
    /// Score every symbol name against the query
    Match {
        query: String,

        /// Only print the first N ranked entries
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the full score map as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the catalogue and print a summary
    Index {
        /// Print the full catalogue as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only results
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "stdlens={0},stdlens_indexer={0},stdlens_core={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Only commands that index read the config and search path
    let inputs = || -> anyhow::Result<(IndexerConfig, Vec<PathBuf>)> {
        let config = commands::load_config(&cli.config)?;
        let search_path = commands::resolve_search_path(cli.search_path.as_deref());
        Ok((config, search_path))
    };

    match cli.command {
        Commands::Search { ref query } => {
            let (config, search_path) = inputs()?;
            commands::search(&config, &search_path, query)
        }
        Commands::Match { ref query, limit, json } => {
            let (config, search_path) = inputs()?;
            commands::fuzzy_match(&config, &search_path, query, limit, json)
        }
        Commands::Index { json } => {
            let (config, search_path) = inputs()?;
            commands::index(&config, &search_path, json)
        }
        Commands::Version => {
            println!("Stdlens v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
