//! Configuration loading
//!
//! Reads `subsift/config.toml` from the platform config directory. A missing
//! file yields the defaults; a file that exists but does not parse is an
//! error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SubsiftError;

mod types;

pub use types::{Config, DropdownConfig};

/// Default config file location: `<config_dir>/subsift/config.toml`
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("subsift").join("config.toml"))
}

impl Config {
    /// Load configuration, preferring `override_path` when given
    pub fn load(override_path: Option<&Path>) -> Result<Config, SubsiftError> {
        let path = match override_path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) => path,
                None => return Ok(Config::default()),
            },
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|err| SubsiftError::InvalidConfig {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
