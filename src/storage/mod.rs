//! Client storage
//!
//! Key-value storage for the little state that survives a restart (the
//! signed-in user). It supports:
//! - In-memory storage (moka) - lost when the process exits
//! - File storage - one JSON document per key in a directory
//!
//! The storage driver is selected based on configuration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pressroom::storage::{create_storage, StorageLayer};
//! use pressroom::config::StorageConfig;
//!
//! let storage = create_storage(&StorageConfig::default()).await?;
//! storage.set("user", &user).await?;
//! ```

pub mod file;
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::config::{StorageConfig, StorageDriver};

/// Storage layer trait
///
/// Generic methods keep this trait from being used as `dyn StorageLayer`;
/// the `Storage` enum provides runtime polymorphism instead.
#[async_trait]
pub trait StorageLayer: Send + Sync {
    /// Get a value
    ///
    /// `Ok(None)` when the key is absent; an error when the stored value
    /// cannot be decoded as `T`.
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>>;

    /// Store a value, replacing any previous one
    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()>;

    /// Remove a value (absent keys are not an error)
    async fn remove(&self, key: &str) -> Result<()>;

    /// Remove every value
    async fn clear(&self) -> Result<()>;
}

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Unified storage enum for runtime polymorphism
#[derive(Debug)]
pub enum Storage {
    /// In-memory storage
    Memory(MemoryStorage),
    /// File-backed storage
    File(FileStorage),
}

#[async_trait]
impl StorageLayer for Storage {
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>> {
        match self {
            Storage::Memory(storage) => storage.get(key).await,
            Storage::File(storage) => storage.get(key).await,
        }
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()> {
        match self {
            Storage::Memory(storage) => storage.set(key, value).await,
            Storage::File(storage) => storage.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match self {
            Storage::Memory(storage) => storage.remove(key).await,
            Storage::File(storage) => storage.remove(key).await,
        }
    }

    async fn clear(&self) -> Result<()> {
        match self {
            Storage::Memory(storage) => storage.clear().await,
            Storage::File(storage) => storage.clear().await,
        }
    }
}

/// Create a storage backend from configuration
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<Storage>> {
    let storage = match config.driver {
        StorageDriver::Memory => {
            tracing::info!("Using in-memory client storage");
            Storage::Memory(MemoryStorage::new())
        }
        StorageDriver::File => {
            tracing::info!("Using file client storage at {}", config.path.display());
            Storage::File(FileStorage::open(&config.path).await?)
        }
    };
    Ok(Arc::new(storage))
}
