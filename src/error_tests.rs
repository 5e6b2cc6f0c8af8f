//! Tests for custom error types

use super::*;

#[test]
fn test_invalid_config_display() {
    let err = SubsiftError::InvalidConfig {
        path: "/tmp/config.toml".to_string(),
        reason: "expected integer".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid config file /tmp/config.toml: expected integer"
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = SubsiftError::from(io_err);
    assert!(matches!(err, SubsiftError::Io(_)));
    assert!(err.to_string().starts_with("IO error:"));
}
