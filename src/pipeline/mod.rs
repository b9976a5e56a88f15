//! Experiment pipeline
//!
//! This module provides the batch layer on top of [`crate::app::App`]:
//! - Parameter sweeps over branching factors and depths
//! - Per-cell aggregation of expansion counts
//! - Named presets for the normal and anomaly conditions

pub mod presets;
pub mod results;
pub mod sweep;

pub use presets::SweepPreset;
pub use results::{CellSummary, ResultsTable};
pub use sweep::{Sweep, SweepConfig, SweepFailure, SweepObserver, SweepOutcome};
