//! Error handling for CSV tidy operations.
//!
//! Provides error types with context for argument handling, file
//! loading, and serialization failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TidyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] polars::error::PolarsError),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, TidyError>;
