//! Export functionality for experiment results
//!
//! This module provides exporters for writing sweep results to files.

pub mod results_csv;

pub use results_csv::ResultsCsvExporter;
