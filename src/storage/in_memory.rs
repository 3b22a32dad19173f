//! In-memory implementation of Storage for testing and development

use crate::core::Storage;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory key-value storage
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Clones share the same slots.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        slots.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        slots.remove(key);

        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut keys: Vec<String> = slots.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
