//! CSV serialization of the in-memory tabular dataset.
//!
//! Writes the frame back out with the configured delimiter. polars
//! carries no implicit row index, so none is ever written; the output
//! holds exactly the named columns of the frame.

use crate::config::Config;
use crate::error::Result;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Serialize a DataFrame to a delimited CSV file
///
/// The header row is included and any existing file at `path` is
/// overwritten without confirmation. Filesystem errors propagate
/// unhandled.
pub fn write_table(df: &mut DataFrame, path: &Path, config: &Config) -> Result<()> {
    let mut file = File::create(path)?;

    CsvWriter::new(&mut file)
        .include_header(config.include_header)
        .with_separator(config.delimiter)
        .finish(df)?;

    debug!(
        "Wrote {} rows x {} columns to {}",
        df.height(),
        df.width(),
        path.display()
    );

    Ok(())
}
