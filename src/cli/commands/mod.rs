//! Subcommands of the `dfbnb` binary

pub mod generate;
pub mod run;
pub mod search;
pub mod sweep;

use crate::{cli::output::print_kv, tree::TreeConfig};

fn print_tree_config(tree: &TreeConfig) {
    print_kv("Branching factor", &tree.branching_factor.to_string());
    print_kv("Depth", &tree.depth.to_string());
    print_kv("Goal rule", &tree.goal_rule.to_string());
}
