// 💾 JSON Storage - snapshot of every client, written after each change
//
// Loading goes through the same validating constructors as user input, so a
// hand-edited file with a zero quantity is rejected instead of imported.

use crate::entities::Client;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct TrackerData {
    #[serde(default)]
    clients: Vec<Client>,
}

#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all clients; a missing file is an empty tracker
    pub fn load(&self) -> Result<Vec<Client>> {
        if !self.path.exists() {
            log::info!("No data file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read data file: {}", self.path.display()))?;
        let data: TrackerData = serde_json::from_str(&text)
            .with_context(|| format!("Data file is not in the correct format: {}", self.path.display()))?;

        log::info!("Loaded {} clients from {}", data.clients.len(), self.path.display());
        Ok(data.clients)
    }

    /// Overwrite the data file with `clients`
    pub fn save(&self, clients: &[Client]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let data = TrackerData {
            clients: clients.to_vec(),
        };
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write data file: {}", self.path.display()))?;

        log::debug!("Saved {} clients to {}", clients.len(), self.path.display());
        Ok(())
    }
}
