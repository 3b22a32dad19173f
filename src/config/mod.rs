//! Configuration loading and management

use crate::core::Storage;
use crate::storage::{FileStorage, InMemoryStorage};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Which backend holds the slots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Process-local map, lost on exit
    #[default]
    Memory,

    /// One JSON file per slot under `dir`
    File { dir: PathBuf },
}

fn seed_demo_data() -> bool {
    true
}

/// Complete configuration for an RCM session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RcmConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    /// Write the demo records into empty slots on first load
    #[serde(default = "seed_demo_data")]
    pub seed_demo_data: bool,
}

impl Default for RcmConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            seed_demo_data: true,
        }
    }
}

impl RcmConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// In-memory storage, seeded
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// File storage under `dir`, seeded
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageConfig::File { dir: dir.into() },
            seed_demo_data: true,
        }
    }

    /// Open the configured backend
    pub fn open_storage(&self) -> Result<Arc<dyn Storage>> {
        let storage: Arc<dyn Storage> = match &self.storage {
            StorageConfig::Memory => Arc::new(InMemoryStorage::new()),
            StorageConfig::File { dir } => Arc::new(FileStorage::open(dir)?),
        };
        tracing::info!(backend = ?self.storage, seed = self.seed_demo_data, "opened storage");
        Ok(storage)
    }
}
