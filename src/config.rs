//! Runtime configuration.
//!
//! The library never goes looking for a config file. The CLI loads one only
//! when it is given `--config <path>`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::color::BrightBackground;

/// Errors raised while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Tunables for spinner timing, cursor queries and color rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Pause between spinner frames, in milliseconds (default: 50)
    pub spinner_interval_ms: u64,
    /// How long a cursor-position query waits for the reply (default: 2000)
    pub cursor_timeout_ms: u64,
    /// Rendering of background indices above 7 (default: blink)
    pub bright_background: BrightBackground,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spinner_interval_ms: 50,
            cursor_timeout_ms: 2000,
            bright_background: BrightBackground::Blink,
        }
    }
}

impl Config {
    /// Load a config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn spinner_interval(&self) -> Duration {
        Duration::from_millis(self.spinner_interval_ms)
    }

    pub fn cursor_timeout(&self) -> Duration {
        Duration::from_millis(self.cursor_timeout_ms)
    }
}
