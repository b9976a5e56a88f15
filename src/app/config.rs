//! Configuration types for experiment runs.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::tree::{CostDistribution, GoalRule, TreeConfig};

/// Where the edge relation of a run lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageLocation {
    /// SQLite database file
    Sqlite(PathBuf),
    /// Private in-memory SQLite database
    #[default]
    SqliteInMemory,
    /// Map-backed store without SQLite
    Memory,
}

impl StorageLocation {
    /// SQLite file at `path`.
    pub fn sqlite(path: impl AsRef<Path>) -> Self {
        StorageLocation::Sqlite(path.as_ref().to_path_buf())
    }

    /// Whether the edges outlive the run.
    pub fn is_persistent(&self) -> bool {
        matches!(self, StorageLocation::Sqlite(_))
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageLocation::Sqlite(path) => write!(f, "sqlite:{}", path.display()),
            StorageLocation::SqliteInMemory => f.write_str("sqlite::memory:"),
            StorageLocation::Memory => f.write_str("memory"),
        }
    }
}

/// Configuration of one generate-then-search experiment.
///
/// # Examples
///
/// ```
/// use dfbnb::app::{ExperimentConfig, StorageLocation};
/// use dfbnb::tree::{CostDistribution, GoalRule};
///
/// let config = ExperimentConfig::new(3, 6, CostDistribution::Uniform)
///     .with_goal_rule(GoalRule::NodeThreshold)
///     .with_storage(StorageLocation::sqlite("databases/tree_b3_d6.db"))
///     .with_seed(42);
/// assert_eq!(config.tree.branching_factor, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Shape and weights of the generated tree
    pub tree: TreeConfig,
    /// Backing store of the edge relation
    pub storage: StorageLocation,
    /// Seed for the weight sampler (None = app default or fresh entropy)
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    /// Create a configuration stored in an in-memory SQLite database.
    pub fn new(branching_factor: u32, depth: u32, distribution: CostDistribution) -> Self {
        Self::from_tree(TreeConfig::new(branching_factor, depth, distribution))
    }

    /// Wrap an existing tree configuration.
    pub fn from_tree(tree: TreeConfig) -> Self {
        Self {
            tree,
            storage: StorageLocation::default(),
            seed: None,
        }
    }

    /// Set the goal rule.
    pub fn with_goal_rule(mut self, goal_rule: GoalRule) -> Self {
        self.tree.goal_rule = goal_rule;
        self
    }

    /// Set the storage location.
    pub fn with_storage(mut self, storage: StorageLocation) -> Self {
        self.storage = storage;
        self
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
