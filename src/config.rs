//! Run configuration for the tidy pipeline.
//!
//! The configuration is assembled entirely from command-line
//! arguments; there is no config file and no environment layering.
//! Serialization parameters come from [`crate::constants`] so the
//! delimiter is defined in exactly one place for read and write.

use crate::cli::args::Args;
use crate::constants::{FIELD_DELIMITER, INCLUDE_HEADER};
use std::path::PathBuf;

/// Resolved settings for a single tidy run
#[derive(Debug, Clone)]
pub struct Config {
    /// Source CSV file path
    pub input_path: PathBuf,

    /// Destination CSV file path
    pub output_path: PathBuf,

    /// Field delimiter for both read and write
    pub delimiter: u8,

    /// Emit a header row when writing
    pub include_header: bool,
}

impl Config {
    /// Build a run configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            input_path: args.input_path.clone(),
            output_path: args.output_path.clone(),
            delimiter: FIELD_DELIMITER,
            include_header: INCLUDE_HEADER,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_path: PathBuf::new(),
            delimiter: FIELD_DELIMITER,
            include_header: INCLUDE_HEADER,
        }
    }
}
