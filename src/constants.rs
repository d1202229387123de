//! Application constants for CSV tidy
//!
//! This module contains the fixed serialization parameters used
//! throughout the application.

/// Field delimiter for both reading and writing
pub const FIELD_DELIMITER: u8 = b';';

/// Whether output files carry a header row
pub const INCLUDE_HEADER: bool = true;

/// Default log level when no verbosity flags are given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
