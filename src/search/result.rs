//! Search results.

use std::collections::HashSet;

use serde::Serialize;

use crate::identifiers::NodeId;

/// Distinct nodes visited by a search, in first-visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpansionLog {
    order: Vec<NodeId>,
    #[serde(skip)]
    seen: HashSet<NodeId>,
}

impl ExpansionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` unless it was already visited. Returns whether it was new.
    pub fn record(&mut self, node: NodeId) -> bool {
        if !self.seen.insert(node) {
            return false;
        }
        self.order.push(node);
        true
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.seen.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    pub fn into_vec(self) -> Vec<NodeId> {
        self.order
    }
}

impl<'a> IntoIterator for &'a ExpansionLog {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Counters collected during one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Frames taken off the stack
    pub frames_visited: u64,
    /// Frames discarded by the bound test
    pub frames_pruned: u64,
    /// Nodes whose children were fetched from the store
    pub nodes_expanded: u64,
    /// Times the incumbent improved
    pub incumbent_updates: u64,
    /// Deepest frame visited
    pub max_depth: u32,
}

/// Outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Root-to-goal path of the best solution, empty if none was found
    pub optimal_path: Vec<NodeId>,
    /// Cost of `optimal_path`, `None` if no solution was found
    pub optimal_cost: Option<u64>,
    /// Distinct visited nodes in first-visit order
    pub expansion_log: ExpansionLog,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Number of distinct nodes the search visited.
    pub fn nodes_expanded(&self) -> usize {
        self.expansion_log.len()
    }

    /// Whether a goal was reached.
    pub fn found_solution(&self) -> bool {
        self.optimal_cost.is_some()
    }
}
