//! Depth-first branch-and-bound over synthetic weighted trees
//!
//! This crate provides:
//! - Seeded generation of complete weighted `b`-ary trees into an edge store
//! - SQLite and in-memory edge stores behind a common port
//! - An iterative DFBnB engine reporting the optimal path, its cost and the
//!   expansion log
//! - A parameter sweep harness writing mean expansion counts to CSV

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod export;
pub mod identifiers;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tree;
pub mod types;

pub use app::{App, ExperimentConfig, StorageLocation};
pub use error::{Error, ErrorKind, Result};
pub use identifiers::NodeId;
pub use search::{SearchEngine, SearchResult, search};
pub use tree::{CostDistribution, GoalRule, TreeConfig, TreeGenerator};
pub use types::{ChildEdge, Edge};
