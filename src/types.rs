//! Edge records shared by the generator, the stores and the search.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::identifiers::NodeId;

/// A weighted parent→child edge as persisted in an edge store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u32,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: NodeId, to: NodeId, weight: u32) -> Self {
        Self { from, to, weight }
    }

    /// The child half of this edge.
    pub fn child(&self) -> ChildEdge {
        ChildEdge {
            to: self.to,
            weight: self.weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} ({})", self.from, self.to, self.weight)
    }
}

/// An outgoing edge as returned by [`crate::ports::EdgeStore::children_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChildEdge {
    pub to: NodeId,
    pub weight: u32,
}

impl ChildEdge {
    /// Create a new child edge.
    pub fn new(to: NodeId, weight: u32) -> Self {
        Self { to, weight }
    }
}

/// Ordering used for expansion: ascending weight, then ascending child id.
impl Ord for ChildEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl PartialOrd for ChildEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_edges_order_by_weight_then_id() {
        let mut edges = vec![
            ChildEdge::new(NodeId::new(5), 1),
            ChildEdge::new(NodeId::new(4), 1),
            ChildEdge::new(NodeId::new(6), 0),
        ];
        edges.sort();
        let order: Vec<u64> = edges.iter().map(|e| e.to.value()).collect();
        assert_eq!(order, vec![6, 4, 5]);
    }
}
