// ⚙️ Configuration - tracker.toml
//
// Every key is optional:
//
//   data_file = "data/tracker.json"
//   log_level = "info"
//   prompt = "> "
//   autosave = true

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Where clients are saved between sessions
    pub data_file: PathBuf,

    /// env_logger filter used when RUST_LOG is unset
    pub log_level: String,

    pub prompt: String,

    /// Save after every command that changes data
    pub autosave: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            data_file: PathBuf::from("data/tracker.json"),
            log_level: "info".to_string(),
            prompt: "> ".to_string(),
            autosave: true,
        }
    }
}

impl TrackerConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid tracker configuration")
    }

    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In config file {}", path.display()))
    }
}
