//! In-memory storage implementation using moka
//!
//! Values are kept as JSON strings so any serializable type can be stored.
//! Entries never expire; they live until removed or the process exits.

use super::StorageLayer;
use anyhow::{Context, Result};
use async_trait::async_trait;
use moka::future::Cache;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// In-memory key-value storage
#[derive(Clone)]
pub struct MemoryStorage {
    entries: Cache<String, Arc<String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }

    /// Store an already-encoded value
    ///
    /// Lets tests and callers place data that may not decode cleanly.
    pub async fn set_raw(&self, key: &str, raw: impl Into<String>) {
        self.entries.insert(key.to_string(), Arc::new(raw.into())).await;
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStorage")
            .field("entry_count", &self.entries.entry_count())
            .finish()
    }
}

#[async_trait]
impl StorageLayer for MemoryStorage {
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>> {
        match self.entries.get(key).await {
            Some(raw) => {
                let value = serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to decode stored value for '{}'", key))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).context("Failed to encode value for storage")?;
        self.set_raw(key, raw).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.invalidate(key).await;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks().await;
        Ok(())
    }
}
