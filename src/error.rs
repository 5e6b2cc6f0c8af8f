use thiserror::Error;

/// Custom error types for subsift
#[derive(Debug, Error)]
pub enum SubsiftError {
    #[error("Invalid config file {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
