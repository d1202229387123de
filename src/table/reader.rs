//! CSV loading into the in-memory tabular dataset.
//!
//! The reader delegates parsing entirely to polars: dtype inference,
//! quoting, and the column-consistency invariant all come from the
//! library. The only behavior added here is an existence check so a
//! missing input surfaces as a domain error rather than a bare IO
//! failure.

use crate::config::Config;
use crate::error::{Result, TidyError};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Load a delimited CSV file into a DataFrame
///
/// The file must contain a header row. Fields are split on the
/// configured delimiter; parse failures propagate unhandled.
pub fn read_table(path: &Path, config: &Config) -> Result<DataFrame> {
    if !path.exists() {
        return Err(TidyError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let options = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_separator(config.delimiter));

    let file = File::open(path)?;
    let df = CsvReader::new(file).with_options(options).finish()?;

    // Frame preview, visible at -vv
    debug!("Loaded frame:\n{:?}", df);

    Ok(df)
}
