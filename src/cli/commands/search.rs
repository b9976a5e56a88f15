//! Search command - Run DFBnB over a previously generated store

use std::{io, path::PathBuf};

use anyhow::{Result, bail};
use clap::Parser;

use super::print_tree_config;
use crate::{
    app::{App, StorageLocation},
    cli::{
        config::{TreeArgs, default_db_path},
        output::{format_bound, format_number, format_path, print_kv, print_section},
        trace::TraceObserver,
    },
    search::SearchResult,
    tree::CostDistribution,
};

#[derive(Parser, Debug)]
#[command(about = "Search a previously generated tree")]
pub struct SearchArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// SQLite database file (defaults to graph_b<B>_d<D>.db)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Print every visited frame and a final summary
    #[arg(long)]
    pub trace: bool,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "trace")]
    pub json: bool,
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let db = args
        .db
        .clone()
        .unwrap_or_else(|| default_db_path(args.tree.branching_factor, args.tree.depth));
    if !db.exists() {
        bail!(
            "Database {} does not exist. Run `dfbnb generate` first.",
            db.display()
        );
    }

    // Weights come from the store; the distribution is not consulted.
    let config = args
        .tree
        .experiment(CostDistribution::default(), StorageLocation::sqlite(&db), None);
    let app = App::new();
    let result = if args.trace {
        app.search_observed(&config, TraceObserver::new(io::stdout().lock()))?
    } else {
        app.search(&config)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if !args.trace {
        print_section("Search result");
        print_tree_config(&config.tree);
        print_kv("Database", &db.display().to_string());
        print_search_result(&result);
    }
    Ok(())
}

pub(crate) fn print_search_result(result: &SearchResult) {
    print_kv("Optimal path", &format_path(&result.optimal_path));
    print_kv("Optimal cost", &format_bound(result.optimal_cost));
    print_kv("Nodes expanded", &format_number(result.nodes_expanded()));
    print_kv("Frames pruned", &format_number(result.stats.frames_pruned as usize));
    print_kv(
        "Incumbent updates",
        &result.stats.incumbent_updates.to_string(),
    );
}
