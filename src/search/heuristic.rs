//! Heuristic extension point.

use crate::identifiers::NodeId;

/// Lower bound on the remaining cost from a node to the nearest goal.
///
/// The search adds the estimate to the path cost before the pruning test, so
/// an estimate that over-approximates the true remaining cost can prune the
/// optimal path.
pub trait Heuristic {
    /// Estimated remaining cost below `node`, reached at `depth`.
    fn estimate(&self, node: NodeId, depth: u32) -> u64;
}

/// The zero heuristic: plain branch-and-bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _node: NodeId, _depth: u32) -> u64 {
        0
    }
}

impl<F> Heuristic for F
where
    F: Fn(NodeId, u32) -> u64,
{
    fn estimate(&self, node: NodeId, depth: u32) -> u64 {
        self(node, depth)
    }
}
