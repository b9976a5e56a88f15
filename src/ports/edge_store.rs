//! Edge store port.
//!
//! This module defines the trait boundary between the tree generator and
//! search engine on one side and the storage of the edge relation on the other.

use crate::{
    Result,
    identifiers::NodeId,
    types::{ChildEdge, Edge},
};

/// Port for the persisted parent→children edge relation.
///
/// One store backs one tree at a time: [`EdgeStore::reset`] discards all
/// prior content. The search issues one [`EdgeStore::children_of`] point
/// lookup per expanded node, so implementations must answer it without
/// scanning the whole relation.
///
/// # Examples
///
/// ```
/// use dfbnb::adapters::InMemoryEdgeStore;
/// use dfbnb::identifiers::NodeId;
/// use dfbnb::ports::EdgeStore;
/// use dfbnb::types::Edge;
///
/// fn heaviest_child<S: EdgeStore + ?Sized>(store: &S, node: NodeId) -> dfbnb::Result<Option<u32>> {
///     Ok(store.children_of(node)?.last().map(|edge| edge.weight))
/// }
///
/// let mut store = InMemoryEdgeStore::new();
/// store.insert(Edge::new(NodeId::ROOT, NodeId::new(2), 7))?;
/// assert_eq!(heaviest_child(&store, NodeId::ROOT)?, Some(7));
/// # Ok::<(), dfbnb::Error>(())
/// ```
pub trait EdgeStore {
    /// Drop all edges and recreate an empty relation.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the relation cannot be recreated.
    fn reset(&mut self) -> Result<()>;

    /// Append one edge.
    fn insert(&mut self, edge: Edge) -> Result<()>;

    /// Append a batch of edges.
    ///
    /// Implementations backed by a database write the batch in a single
    /// transaction; the default inserts edges one by one.
    fn write_batch(&mut self, edges: &[Edge]) -> Result<()> {
        for edge in edges {
            self.insert(*edge)?;
        }
        Ok(())
    }

    /// Outgoing edges of `node`, ascending by weight and then by child id.
    ///
    /// Returns an empty list for nodes without children.
    fn children_of(&self, node: NodeId) -> Result<Vec<ChildEdge>>;

    /// Total number of stored edges.
    fn edge_count(&self) -> Result<u64>;
}

impl<S: EdgeStore + ?Sized> EdgeStore for Box<S> {
    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn insert(&mut self, edge: Edge) -> Result<()> {
        (**self).insert(edge)
    }

    fn write_batch(&mut self, edges: &[Edge]) -> Result<()> {
        (**self).write_batch(edges)
    }

    fn children_of(&self, node: NodeId) -> Result<Vec<ChildEdge>> {
        (**self).children_of(node)
    }

    fn edge_count(&self) -> Result<u64> {
        (**self).edge_count()
    }
}
