//! Argument groups shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::{
    app::{ExperimentConfig, StorageLocation},
    tree::{CostDistribution, GoalRule, TreeConfig},
};

/// Shape of the tree a command works on
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Children per internal node
    #[arg(long, short = 'b')]
    pub branching_factor: u32,

    /// Depth of the goal level
    #[arg(long, short = 'd')]
    pub depth: u32,

    /// Goal rule: depth or threshold
    #[arg(long, default_value_t = GoalRule::Depth)]
    pub goal_rule: GoalRule,
}

impl TreeArgs {
    /// Tree configuration sampling weights from `distribution`.
    pub fn tree_config(&self, distribution: CostDistribution) -> TreeConfig {
        TreeConfig::new(self.branching_factor, self.depth, distribution)
            .with_goal_rule(self.goal_rule)
    }

    /// Experiment configuration on `storage`, seeded when `seed` is given.
    pub fn experiment(
        &self,
        distribution: CostDistribution,
        storage: StorageLocation,
        seed: Option<u64>,
    ) -> ExperimentConfig {
        let config =
            ExperimentConfig::from_tree(self.tree_config(distribution)).with_storage(storage);
        match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Default store file for a tree when `--db` is omitted.
pub fn default_db_path(branching_factor: u32, depth: u32) -> PathBuf {
    PathBuf::from(format!("graph_b{branching_factor}_d{depth}.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_seeded_experiment() {
        let args = TreeArgs {
            branching_factor: 3,
            depth: 4,
            goal_rule: GoalRule::NodeThreshold,
        };
        let config = args.experiment(
            CostDistribution::Custom,
            StorageLocation::Memory,
            Some(5),
        );
        assert_eq!(config.tree.goal_rule, GoalRule::NodeThreshold);
        assert_eq!(config.tree.distribution, CostDistribution::Custom);
        assert_eq!(config.storage, StorageLocation::Memory);
        assert_eq!(config.seed, Some(5));
        assert_eq!(default_db_path(3, 4), PathBuf::from("graph_b3_d4.db"));
    }
}
