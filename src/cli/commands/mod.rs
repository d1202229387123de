//! Command implementations for the CSV tidy CLI
//!
//! This module contains the main command execution logic and shared
//! reporting types for the CLI interface.

pub mod shared;
pub mod tidy;

pub use shared::TidyStats;

use crate::Result;
use crate::cli::args::Args;

/// Main command runner for CSV tidy
///
/// The tool has a single operation, so this dispatches straight into
/// the tidy pipeline.
pub fn run(args: Args) -> Result<TidyStats> {
    tidy::run_tidy(args)
}
