//! Command-line argument definitions for CSV tidy
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_LOG_LEVEL;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the CSV tidy tool
///
/// Reads a semicolon-delimited CSV file and writes it back out in a
/// consistent format, dropping the in-memory row index.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv-tidy",
    version,
    about = "Tidy a semicolon-delimited CSV file by re-serializing it in a consistent format"
)]
pub struct Args {
    /// Path to the input CSV file
    ///
    /// Must contain `;`-delimited text with a header row. The path is
    /// not checked until the load step runs.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Path to input CSV file"
    )]
    pub input_path: PathBuf,

    /// Path to the output CSV file
    ///
    /// Any existing file at this path is overwritten without
    /// confirmation.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Path to output CSV file"
    )]
    pub output_path: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
