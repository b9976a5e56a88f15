//! Adapters implementing domain ports.
//!
//! This module contains the storage backends for the edge relation. The
//! generator and the search depend on the `EdgeStore` port, not on these
//! types.

pub mod in_memory_edge_store;
pub mod sqlite_edge_store;

pub use in_memory_edge_store::InMemoryEdgeStore;
pub use sqlite_edge_store::SqliteEdgeStore;
