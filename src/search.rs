//! Depth-first branch-and-bound search
//!
//! This module provides the search engine and the state it carries through a
//! run: frames, the incumbent, the expansion log and the result.

pub mod engine;
pub mod frame;
pub mod heuristic;
pub mod incumbent;
pub mod result;

pub use engine::{SearchEngine, search};
pub use frame::SearchFrame;
pub use heuristic::{Heuristic, ZeroHeuristic};
pub use incumbent::Incumbent;
pub use result::{ExpansionLog, SearchResult, SearchStats};
