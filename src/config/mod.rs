//! Configuration management
//!
//! This module handles loading and parsing configuration for Pressroom.
//! Configuration can be loaded from:
//! - pressroom.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Article store configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Client storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Simulated latency configuration
    #[serde(default)]
    pub latency: LatencyConfig,
}

/// Article store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Populate the store with the demo dataset on startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

fn default_seed_demo_data() -> bool {
    true
}

/// Authentication configuration
///
/// Exactly one credential pair is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Accepted username
    #[serde(default = "default_username")]
    pub username: String,
    /// Accepted password
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "admin".to_string()
}

/// Client storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage driver (memory or file)
    #[serde(default)]
    pub driver: StorageDriver,
    /// Directory for the file driver
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            driver: StorageDriver::default(),
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("data/storage")
}

/// Storage driver type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageDriver {
    /// In-memory storage, lost on exit
    Memory,
    /// One JSON file per key (default)
    #[default]
    File,
}

/// Simulated latency configuration
///
/// Applied by the reader and admin services before they touch the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Delay in milliseconds (0 disables)
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl LatencyConfig {
    /// No simulated delay
    pub fn none() -> Self {
        Self {
            simulated_delay_ms: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

fn default_simulated_delay_ms() -> u64 {
    500
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: format_yaml_error(&e),
        })?;

        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables follow the pattern:
    /// - PRESSROOM_STORE_SEED_DEMO_DATA
    /// - PRESSROOM_AUTH_USERNAME
    /// - PRESSROOM_AUTH_PASSWORD
    /// - PRESSROOM_STORAGE_DRIVER
    /// - PRESSROOM_STORAGE_PATH
    /// - PRESSROOM_LATENCY_SIMULATED_DELAY_MS
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(seed) = std::env::var("PRESSROOM_STORE_SEED_DEMO_DATA") {
            if let Ok(seed) = seed.parse::<bool>() {
                self.store.seed_demo_data = seed;
            }
        }

        if let Ok(username) = std::env::var("PRESSROOM_AUTH_USERNAME") {
            self.auth.username = username;
        }
        if let Ok(password) = std::env::var("PRESSROOM_AUTH_PASSWORD") {
            self.auth.password = password;
        }

        if let Ok(driver) = std::env::var("PRESSROOM_STORAGE_DRIVER") {
            match driver.to_lowercase().as_str() {
                "memory" => self.storage.driver = StorageDriver::Memory,
                "file" => self.storage.driver = StorageDriver::File,
                _ => {} // Ignore invalid values
            }
        }
        if let Ok(path) = std::env::var("PRESSROOM_STORAGE_PATH") {
            self.storage.path = PathBuf::from(path);
        }

        if let Ok(delay) = std::env::var("PRESSROOM_LATENCY_SIMULATED_DELAY_MS") {
            if let Ok(delay) = delay.parse::<u64>() {
                self.latency.simulated_delay_ms = delay;
            }
        }
    }
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared mutex for config tests that modify environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
