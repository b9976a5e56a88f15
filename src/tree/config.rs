//! Tree configuration and the derived tree shape.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::CostDistribution;
use crate::{Error, Result, identifiers::NodeId};

/// Which nodes count as goals, and therefore which nodes receive children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalRule {
    /// A node is a goal iff it sits at the configured depth. Generation
    /// produces the complete `b`-ary tree of that depth.
    #[default]
    Depth,
    /// A node is a goal iff its id is at least `b^depth`. Every id below the
    /// threshold is expanded, so for `b != 2` goals sit at mixed depths.
    NodeThreshold,
}

impl fmt::Display for GoalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalRule::Depth => "depth",
            GoalRule::NodeThreshold => "threshold",
        };
        f.write_str(label)
    }
}

impl FromStr for GoalRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "depth" => Ok(GoalRule::Depth),
            "threshold" | "node-threshold" | "node_threshold" => Ok(GoalRule::NodeThreshold),
            _ => Err(Error::ParseGoalRule {
                input: s.to_string(),
                expected: "depth, threshold".to_string(),
            }),
        }
    }
}

/// Parameters of one generated tree.
///
/// # Examples
///
/// ```
/// use dfbnb::tree::{CostDistribution, GoalRule, TreeConfig};
///
/// let config = TreeConfig::new(2, 3, CostDistribution::Uniform)
///     .with_goal_rule(GoalRule::NodeThreshold);
/// assert_eq!(config.shape()?.edge_count(), 14);
/// # Ok::<(), dfbnb::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Children per internal node
    pub branching_factor: u32,
    /// Depth of the goal level below the root
    pub depth: u32,
    /// Edge weight sampling rule
    pub distribution: CostDistribution,
    /// Goal test used by both generation and search
    #[serde(default)]
    pub goal_rule: GoalRule,
}

impl TreeConfig {
    /// Create a configuration using the depth goal rule.
    pub fn new(branching_factor: u32, depth: u32, distribution: CostDistribution) -> Self {
        Self {
            branching_factor,
            depth,
            distribution,
            goal_rule: GoalRule::default(),
        }
    }

    /// Set the goal rule.
    pub fn with_goal_rule(mut self, goal_rule: GoalRule) -> Self {
        self.goal_rule = goal_rule;
        self
    }

    /// Check the configuration without deriving anything else.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the branching factor is zero or the
    /// tree's node ids would not fit the persisted integer column.
    pub fn validate(&self) -> Result<()> {
        self.shape().map(|_| ())
    }

    /// Derive the closed-form shape of the configured tree.
    pub fn shape(&self) -> Result<TreeShape> {
        TreeShape::new(self)
    }
}

/// Closed-form facts about a validated [`TreeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeShape {
    branching_factor: u32,
    depth: u32,
    goal_rule: GoalRule,
    /// First node id that receives no children; every id below it is internal.
    expansion_limit: u64,
}

impl TreeShape {
    fn new(config: &TreeConfig) -> Result<Self> {
        let b = config.branching_factor;
        let depth = config.depth;
        if b == 0 {
            return Err(Error::InvalidConfiguration {
                message: "branching factor must be at least 1".to_string(),
            });
        }

        let too_large = |reason: &str| Error::TreeTooLarge {
            branching_factor: b,
            depth,
            reason: reason.to_string(),
        };

        let expansion_limit = match config.goal_rule {
            GoalRule::NodeThreshold => u64::from(b)
                .checked_pow(depth)
                .ok_or_else(|| too_large("goal threshold overflows"))?,
            GoalRule::Depth => {
                // Level-order numbering: ids 1..=sum(b^d, d < depth) are internal.
                let mut internal: u64 = 0;
                let mut level: u64 = 1;
                for _ in 0..depth {
                    internal = internal
                        .checked_add(level)
                        .ok_or_else(|| too_large("internal node count overflows"))?;
                    level = level.saturating_mul(u64::from(b));
                }
                internal + 1
            }
        };

        // Largest child id generated: (limit - 2) * b + b + 1.
        let max_id = (expansion_limit - 1)
            .checked_mul(u64::from(b))
            .and_then(|edges| edges.checked_add(1))
            .ok_or_else(|| too_large("node ids overflow"))?;
        if i64::try_from(max_id).is_err() {
            return Err(too_large("node ids exceed the persisted integer range"));
        }

        Ok(Self {
            branching_factor: b,
            depth,
            goal_rule: config.goal_rule,
            expansion_limit,
        })
    }

    pub fn branching_factor(&self) -> u32 {
        self.branching_factor
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn goal_rule(&self) -> GoalRule {
        self.goal_rule
    }

    /// First node id that is not expanded during generation.
    pub fn expansion_limit(&self) -> u64 {
        self.expansion_limit
    }

    /// Node ids that receive children, in ascending order.
    pub fn internal_nodes(&self) -> impl Iterator<Item = NodeId> {
        (1..self.expansion_limit).map(NodeId::new)
    }

    /// Whether generation gives `node` children.
    pub fn is_internal(&self, node: NodeId) -> bool {
        node.value() < self.expansion_limit
    }

    /// Goal test for a node reached at `depth` levels below the root.
    pub fn is_goal(&self, node: NodeId, depth: u32) -> bool {
        match self.goal_rule {
            GoalRule::Depth => depth >= self.depth,
            GoalRule::NodeThreshold => node.value() >= self.expansion_limit,
        }
    }

    /// Number of edges a generation writes.
    pub fn edge_count(&self) -> u64 {
        (self.expansion_limit - 1) * u64::from(self.branching_factor)
    }
}
