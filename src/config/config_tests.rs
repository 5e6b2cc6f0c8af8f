//! Tests for config file loading

use super::*;
use std::io::Write;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.dropdown.max_visible_rows, 10);
}

#[test]
fn test_loads_override_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[dropdown]\nmax_visible_rows = 5").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.dropdown.max_visible_rows, 5);
    assert!(config.dropdown.colored_badges);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[dropdown\nmax_visible_rows = 5").unwrap();

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, SubsiftError::InvalidConfig { .. }));
    assert!(err.to_string().contains("Invalid config file"));
}
