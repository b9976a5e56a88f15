//! Ports (trait boundaries) for external dependencies.
//!
//! These traits are owned by the domain (generation and search) and
//! implemented by adapters: storage backends for the edge relation and
//! observers of a search run.

pub mod edge_store;
pub mod observer;

pub use edge_store::EdgeStore;
pub use observer::{NullObserver, SearchObserver};
