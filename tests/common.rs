//! Common test utilities for the dfbnb test suite.

#![allow(dead_code)]

use dfbnb::{
    adapters::InMemoryEdgeStore,
    identifiers::NodeId,
    ports::EdgeStore,
    types::Edge,
};

/// Binary depth-2 tree whose left spine is free: optimal path `1 -> 2 -> 4`.
pub fn scenario_store() -> InMemoryEdgeStore {
    InMemoryEdgeStore::from_edges(
        [(1, 2, 0), (1, 3, 1), (2, 4, 0), (2, 5, 1), (3, 6, 0), (3, 7, 1)]
            .map(|(from, to, weight)| Edge::new(NodeId::new(from), NodeId::new(to), weight)),
    )
}

/// Sum the stored weights along `path`, panicking if an edge is missing.
pub fn path_cost<S: EdgeStore + ?Sized>(store: &S, path: &[NodeId]) -> u64 {
    path.windows(2)
        .map(|pair| {
            let children = store.children_of(pair[0]).unwrap();
            let edge = children
                .iter()
                .find(|edge| edge.to == pair[1])
                .unwrap_or_else(|| panic!("no edge {} -> {}", pair[0], pair[1]));
            u64::from(edge.weight)
        })
        .sum()
}

pub fn ids(values: &[u64]) -> Vec<NodeId> {
    values.iter().copied().map(NodeId::new).collect()
}
