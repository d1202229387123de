//! Tidy command implementation for the CSV tidy CLI
//!
//! This module contains the complete pipeline: load the input table,
//! then write it back out unchanged with the canonical delimiter.

use super::shared::{TidyStats, setup_logging};
use crate::Result;
use crate::cli::args::Args;
use crate::config::Config;
use crate::table::{read_table, write_table};
use std::time::Instant;
use tracing::{debug, info};

/// Tidy command runner
///
/// Orchestrates the whole run:
/// 1. Set up logging and build the run configuration
/// 2. Load the input file into a DataFrame
/// 3. Serialize the DataFrame to the output path
///
/// The pipeline is strictly sequential; any error terminates the run.
pub fn run_tidy(args: Args) -> Result<TidyStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(&args)?;

    info!("Starting CSV tidy");
    debug!("Command line arguments: {:?}", args);

    let config = Config::from_args(&args);

    println!("Reading input file from {}", config.input_path.display());
    let mut df = read_table(&config.input_path, &config)?;

    info!("Loaded {} rows x {} columns", df.height(), df.width());

    write_table(&mut df, &config.output_path, &config)?;

    println!("Data has been written to {}", config.output_path.display());

    let stats = TidyStats {
        rows: df.height(),
        columns: df.width(),
        output_bytes: std::fs::metadata(&config.output_path)?.len(),
        processing_time: start_time.elapsed(),
    };

    debug!("Run complete: {:?}", stats);

    Ok(stats)
}
