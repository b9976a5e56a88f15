//! CLI infrastructure for the dfbnb experiment toolkit
//!
//! This module provides the command-line interface for generating trees,
//! searching them, and running parameter sweeps.

pub mod commands;
pub mod config;
pub mod output;
pub mod trace;
