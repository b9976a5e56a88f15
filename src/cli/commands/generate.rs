//! Generate command - Write a weighted tree into a SQLite store

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::print_tree_config;
use crate::{
    app::{App, StorageLocation},
    cli::{
        config::{TreeArgs, default_db_path},
        output::{create_spinner, format_number, print_kv, print_section},
    },
    tree::CostDistribution,
};

#[derive(Parser, Debug)]
#[command(about = "Generate a weighted tree into a SQLite store")]
pub struct GenerateArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Edge cost distribution: zero_or_one, uniform or custom
    #[arg(long, default_value_t = CostDistribution::ZeroOrOne)]
    pub distribution: CostDistribution,

    /// SQLite database file (defaults to graph_b<B>_d<D>.db)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let db = args
        .db
        .clone()
        .unwrap_or_else(|| default_db_path(args.tree.branching_factor, args.tree.depth));
    let config = args
        .tree
        .experiment(args.distribution, StorageLocation::sqlite(&db), args.seed);

    print_section("Generating tree");
    print_tree_config(&config.tree);
    print_kv("Distribution", &config.tree.distribution.to_string());
    print_kv("Database", &db.display().to_string());

    let spinner = create_spinner("Writing edges...");
    let generated = App::new().generate(&config);
    spinner.finish_and_clear();
    let (seed, report) =
        generated.with_context(|| format!("Failed to generate tree into {}", db.display()))?;

    print_kv("Seed", &seed.to_string());
    print_kv(
        "Internal nodes",
        &format_number(report.internal_nodes as usize),
    );
    print_kv("Edges written", &format_number(report.edges_written as usize));
    Ok(())
}
