//! Cached dashboard figures in the `rcm_stats` slot

use crate::core::error::StoreError;
use crate::core::service::Storage;
use crate::reports::SummaryStats;
use std::sync::Arc;

pub const STATS_KEY: &str = "rcm_stats";

/// Last computed [`SummaryStats`], persisted beside the collections
#[derive(Clone)]
pub struct StatsCache {
    storage: Arc<dyn Storage>,
}

impl StatsCache {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Overwrite the cached figures
    pub fn store(&self, stats: &SummaryStats) -> Result<(), StoreError> {
        let raw = serde_json::to_string(stats).map_err(anyhow::Error::from)?;
        self.storage.set(STATS_KEY, &raw)?;
        tracing::debug!(key = STATS_KEY, "cached dashboard stats");
        Ok(())
    }

    /// Cached figures, `None` if nothing has been stored yet
    pub fn cached(&self) -> Result<Option<SummaryStats>, StoreError> {
        let Some(raw) = self.storage.get(STATS_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: STATS_KEY.to_string(),
                message: e.to_string(),
            })
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove(STATS_KEY)?;
        Ok(())
    }
}
