//! Test utilities for the table reader and writer suites.

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

mod writer_tests;

/// Write `contents` to `name` inside `dir` and return the full path
fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}
