//! Tests for CSV serialization behavior

use crate::config::Config;
use crate::table::write_table;
use polars::prelude::*;
use tempfile::TempDir;

#[test]
fn test_write_header_and_delimiter() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");

    let mut df = df!("a" => &[1i64, 3], "b" => &[2i64, 4]).unwrap();
    write_table(&mut df, &path, &Config::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "a;b\n1;2\n3;4\n");
}

#[test]
fn test_write_has_no_index_column() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");

    let mut df = df!("a" => &[1i64], "b" => &[2i64]).unwrap();
    write_table(&mut df, &path, &Config::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let header = written.lines().next().unwrap();
    assert_eq!(header, "a;b");
}

#[test]
fn test_write_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");
    std::fs::write(&path, "stale content that should disappear").unwrap();

    let mut df = df!("a" => &[1i64], "b" => &[2i64]).unwrap();
    write_table(&mut df, &path, &Config::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "a;b\n1;2\n");
}

#[test]
fn test_write_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no_such_dir").join("out.csv");

    let mut df = df!("a" => &[1i64]).unwrap();
    let result = write_table(&mut df, &path, &Config::default());
    assert!(result.is_err());
}
