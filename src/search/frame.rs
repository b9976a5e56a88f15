//! Search frames.

use crate::identifiers::NodeId;

/// One pending descent step of the depth-first search.
///
/// The path of a frame is not stored in the frame: it is the prefix of the
/// engine's trail up to `depth`, which is valid while the frame is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFrame {
    /// Node reached by this step
    pub node: NodeId,
    /// Sum of edge weights from the root to `node`
    pub cost: u64,
    /// Number of edges from the root to `node`
    pub depth: u32,
}

impl SearchFrame {
    /// Frame for the start node.
    pub fn root() -> Self {
        Self {
            node: NodeId::ROOT,
            cost: 0,
            depth: 0,
        }
    }

    /// Frame for a child of this frame reached over an edge of `weight`.
    pub fn child(&self, node: NodeId, weight: u32) -> Self {
        Self {
            node,
            cost: self.cost + u64::from(weight),
            depth: self.depth + 1,
        }
    }
}
