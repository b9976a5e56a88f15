//! Run command - Generate a tree and search it in one go

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use super::{print_tree_config, search::print_search_result};
use crate::{
    app::{App, StorageLocation},
    cli::{
        config::TreeArgs,
        output::{format_number, print_kv, print_section},
        trace::TraceObserver,
    },
    tree::CostDistribution,
};

#[derive(Parser, Debug)]
#[command(about = "Generate a tree and search it")]
pub struct RunArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Edge cost distribution: zero_or_one, uniform or custom
    #[arg(long, default_value_t = CostDistribution::ZeroOrOne)]
    pub distribution: CostDistribution,

    /// SQLite database file (in-memory when omitted)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every visited frame and a final summary
    #[arg(long)]
    pub trace: bool,

    /// Print the outcome as JSON
    #[arg(long, conflicts_with = "trace")]
    pub json: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let storage = args
        .db
        .as_ref()
        .map_or(StorageLocation::SqliteInMemory, StorageLocation::sqlite);
    let config = args.tree.experiment(args.distribution, storage, args.seed);

    let app = App::new();
    let outcome = if args.trace {
        app.run_observed(&config, TraceObserver::new(io::stdout().lock()))?
    } else {
        app.run(&config)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if !args.trace {
        print_section("Experiment");
        print_tree_config(&config.tree);
        print_kv("Distribution", &config.tree.distribution.to_string());
        print_kv("Storage", &config.storage.to_string());
        print_kv("Seed", &outcome.seed.to_string());
        print_kv(
            "Edges written",
            &format_number(outcome.generation.edges_written as usize),
        );
        print_search_result(&outcome.search);
    }
    Ok(())
}
