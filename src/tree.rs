//! Synthetic weighted trees
//!
//! This module provides the tree configuration, the edge cost distributions
//! and the generator that writes a sampled tree into an edge store.

pub mod config;
pub mod distribution;
pub mod generator;

pub use config::{GoalRule, TreeConfig, TreeShape};
pub use distribution::CostDistribution;
pub use generator::{GenerationReport, TreeGenerator};
