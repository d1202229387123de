//! Shared components for CLI commands
//!
//! Run statistics and logging setup used by the command layer.

use crate::Result;
use crate::cli::args::Args;
use tracing::debug;

/// Statistics for a completed tidy run
#[derive(Debug, Clone, Default)]
pub struct TidyStats {
    /// Number of data rows read (header excluded)
    pub rows: usize,
    /// Number of columns read
    pub columns: usize,
    /// Size of the written output file in bytes
    pub output_bytes: u64,
    /// Total pipeline time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging for the tidy command
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_tidy={}", log_level)));

    // Standard logging to stderr; a second init in the same process is
    // a no-op so the pipeline can be driven repeatedly from tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
