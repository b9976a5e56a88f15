//! dfbnb CLI - Depth-first branch-and-bound experiments on synthetic trees
//!
//! This CLI provides a unified interface for:
//! - Generating weighted trees into SQLite stores
//! - Searching a stored tree for its cheapest root-to-goal path
//! - Running generate-then-search experiments
//! - Sweeping branching factors and depths and saving result tables

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "dfbnb")]
#[command(version, about = "Depth-first branch-and-bound experiment toolkit", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weighted tree into a SQLite store
    Generate(dfbnb::cli::commands::generate::GenerateArgs),

    /// Search a previously generated tree
    Search(dfbnb::cli::commands::search::SearchArgs),

    /// Generate a tree and search it
    Run(dfbnb::cli::commands::run::RunArgs),

    /// Sweep branching factors and depths
    Sweep(dfbnb::cli::commands::sweep::SweepArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => dfbnb::cli::commands::generate::execute(args),
        Commands::Search(args) => dfbnb::cli::commands::search::execute(args),
        Commands::Run(args) => dfbnb::cli::commands::run::execute(args),
        Commands::Sweep(args) => dfbnb::cli::commands::sweep::execute(args),
    }
}
