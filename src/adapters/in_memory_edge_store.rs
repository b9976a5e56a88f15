//! In-memory edge store.
//!
//! This adapter keeps the edge relation in a map keyed by parent node,
//! enabling fast tests and small runs without any database.

use std::collections::BTreeMap;

use crate::{
    Result,
    identifiers::NodeId,
    ports::EdgeStore,
    types::{ChildEdge, Edge},
};

/// Map-backed [`EdgeStore`].
///
/// # Examples
///
/// ```
/// use dfbnb::adapters::InMemoryEdgeStore;
/// use dfbnb::identifiers::NodeId;
/// use dfbnb::ports::EdgeStore;
/// use dfbnb::types::Edge;
///
/// let mut store = InMemoryEdgeStore::new();
/// store.insert(Edge::new(NodeId::ROOT, NodeId::new(2), 3))?;
/// store.insert(Edge::new(NodeId::ROOT, NodeId::new(3), 1))?;
///
/// let children = store.children_of(NodeId::ROOT)?;
/// assert_eq!(children[0].to, NodeId::new(3));
/// # Ok::<(), dfbnb::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEdgeStore {
    children: BTreeMap<NodeId, Vec<ChildEdge>>,
    edge_count: u64,
}

impl InMemoryEdgeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding exactly `edges`.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut store = Self::new();
        for edge in edges {
            store.push(edge);
        }
        store
    }

    /// Every stored edge, grouped by parent in ascending order and in
    /// insertion order within a parent.
    pub fn edges(&self) -> Vec<Edge> {
        self.children
            .iter()
            .flat_map(|(from, children)| {
                children
                    .iter()
                    .map(move |child| Edge::new(*from, child.to, child.weight))
            })
            .collect()
    }

    /// Whether the store holds no edges.
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    fn push(&mut self, edge: Edge) {
        self.children.entry(edge.from).or_default().push(edge.child());
        self.edge_count += 1;
    }
}

impl EdgeStore for InMemoryEdgeStore {
    fn reset(&mut self) -> Result<()> {
        self.children.clear();
        self.edge_count = 0;
        Ok(())
    }

    fn insert(&mut self, edge: Edge) -> Result<()> {
        self.push(edge);
        Ok(())
    }

    fn children_of(&self, node: NodeId) -> Result<Vec<ChildEdge>> {
        let mut children = self.children.get(&node).cloned().unwrap_or_default();
        children.sort();
        Ok(children)
    }

    fn edge_count(&self) -> Result<u64> {
        Ok(self.edge_count)
    }
}
