// Configuration type definitions

use serde::Deserialize;

fn default_max_visible_rows() -> usize {
    10
}

fn default_colored_badges() -> bool {
    true
}

/// Dropdown configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct DropdownConfig {
    /// Suggestion rows shown at once; the list scrolls past this
    #[serde(default = "default_max_visible_rows")]
    pub max_visible_rows: usize,

    /// Color the badge tags; plain gray when disabled
    #[serde(default = "default_colored_badges")]
    pub colored_badges: bool,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        DropdownConfig {
            max_visible_rows: default_max_visible_rows(),
            colored_badges: default_colored_badges(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dropdown: DropdownConfig,
}
