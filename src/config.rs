//! CLI configuration
//!
//! Read from ~/.config/merkle_levels/config.json unless a path is given.
//! Every field is optional; command-line flags take precedence.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default log filter when neither the flag nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings for the `merkle` binary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output format: "json" or "text"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// env_logger filter, e.g. "debug" or "merkle_levels=trace"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Default config path (~/.config/merkle_levels/config.json)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("merkle_levels").join("config.json"))
    }

    /// Load config from `path`, or from the default path
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// The log filter to use, defaulting to [`DEFAULT_LOG_LEVEL`]
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
