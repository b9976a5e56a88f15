//! Node identifiers for generated trees.
//!
//! Nodes are numbered in level order: the root is 1 and the children of
//! node `p` in a `b`-ary tree are `(p - 1) * b + k + 1` for `k = 1..=b`.
//! The numbering is a closed-form encoding of the complete tree, so parents,
//! children and depths can be recovered without consulting the store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node in a generated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// The root of every generated tree.
    pub const ROOT: NodeId = NodeId(1);

    /// Wrap a raw identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfbnb::identifiers::NodeId;
    ///
    /// let node = NodeId::new(4);
    /// assert_eq!(node.value(), 4);
    /// ```
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw identifier.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether this is the root node.
    pub const fn is_root(self) -> bool {
        self.0 == 1
    }

    /// Child reached through the 1-based `branch` of this node.
    ///
    /// Returns `None` when the identifier would overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfbnb::identifiers::NodeId;
    ///
    /// assert_eq!(NodeId::ROOT.child(2, 1), Some(NodeId::new(2)));
    /// assert_eq!(NodeId::new(3).child(2, 2), Some(NodeId::new(7)));
    /// ```
    pub fn child(self, branching_factor: u32, branch: u32) -> Option<NodeId> {
        debug_assert!((1..=branching_factor).contains(&branch));
        (self.0 - 1)
            .checked_mul(u64::from(branching_factor))?
            .checked_add(u64::from(branch) + 1)
            .map(NodeId)
    }

    /// Children of this node, in branch order.
    pub fn children(self, branching_factor: u32) -> impl Iterator<Item = NodeId> {
        (1..=branching_factor).filter_map(move |branch| self.child(branching_factor, branch))
    }

    /// Parent of this node, or `None` for the root.
    pub fn parent(self, branching_factor: u32) -> Option<NodeId> {
        if self.0 <= 1 || branching_factor == 0 {
            return None;
        }
        Some(NodeId((self.0 - 2) / u64::from(branching_factor) + 1))
    }

    /// 1-based branch index under the parent, or `None` for the root.
    pub fn branch_index(self, branching_factor: u32) -> Option<u32> {
        if self.0 <= 1 || branching_factor == 0 {
            return None;
        }
        let offset = (self.0 - 2) % u64::from(branching_factor);
        u32::try_from(offset + 1).ok()
    }

    /// Depth of this node below the root.
    pub fn depth(self, branching_factor: u32) -> u32 {
        let mut depth = 0;
        let mut node = self;
        while let Some(parent) = node.parent(branching_factor) {
            node = parent;
            depth += 1;
        }
        depth
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<NodeId> for u64 {
    fn from(node: NodeId) -> Self {
        node.0
    }
}

impl PartialEq<u64> for NodeId {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_tree_numbering_is_level_order() {
        let children: Vec<_> = NodeId::ROOT.children(2).collect();
        assert_eq!(children, vec![NodeId::new(2), NodeId::new(3)]);
        let grandchildren: Vec<_> = NodeId::new(3).children(2).collect();
        assert_eq!(grandchildren, vec![NodeId::new(6), NodeId::new(7)]);
    }

    #[test]
    fn parent_inverts_child() {
        for b in 1..=6 {
            for p in 1..200u64 {
                let parent = NodeId::new(p);
                for (k, child) in parent.children(b).enumerate() {
                    assert_eq!(child.parent(b), Some(parent), "b={b} p={p}");
                    assert_eq!(child.branch_index(b), Some(k as u32 + 1));
                }
            }
        }
        assert_eq!(NodeId::ROOT.parent(3), None);
    }

    #[test]
    fn depth_follows_parent_chain() {
        assert_eq!(NodeId::ROOT.depth(3), 0);
        assert_eq!(NodeId::new(4).depth(3), 1);
        assert_eq!(NodeId::new(5).depth(3), 2);
        assert_eq!(NodeId::new(13).depth(3), 2);
        assert_eq!(NodeId::new(14).depth(3), 3);
        // Unary trees form a chain.
        assert_eq!(NodeId::new(6).depth(1), 5);
    }

    #[test]
    fn child_overflow_is_reported() {
        assert_eq!(NodeId::new(u64::MAX).child(2, 1), None);
    }
}
