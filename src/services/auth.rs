//! Authentication gate
//!
//! Implements the single-account sign-in used to protect the admin surface:
//! - Login against the one configured credential pair
//! - Persisting the signed-in user under a fixed storage key
//! - Restoring that user on the next start
//! - Logout clearing both the in-memory session and the stored record
//!
//! The article store knows nothing about this gate; callers check
//! `is_admin()` before invoking admin writes.

use crate::config::AuthConfig;
use crate::models::AuthUser;
use crate::storage::{Storage, StorageLayer};
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Storage key holding the signed-in user record
pub const USER_STORAGE_KEY: &str = "user";

/// Error types for authentication operations
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Username or password left blank
    #[error("Please enter both username and password")]
    MissingCredentials,

    /// Credentials did not match the configured pair
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Authentication service for the single admin account
pub struct AuthService {
    config: AuthConfig,
    storage: Arc<Storage>,
    current: RwLock<Option<AuthUser>>,
}

impl AuthService {
    /// Create a new auth service with no active session
    ///
    /// Call `restore()` to pick up a session persisted by an earlier run.
    pub fn new(config: AuthConfig, storage: Arc<Storage>) -> Self {
        Self {
            config,
            storage,
            current: RwLock::new(None),
        }
    }

    /// Sign in with a username and password
    ///
    /// On success the user record is persisted and becomes the current
    /// session. On failure nothing is persisted and any existing session is
    /// left untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthUser, AuthError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        if username != self.config.username || password != self.config.password {
            tracing::warn!(username, "Rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let user = AuthUser::admin(username);
        self.storage
            .set(USER_STORAGE_KEY, &user)
            .await
            .context("Failed to persist user session")?;
        *self.current.write().await = Some(user.clone());

        tracing::info!(username, "User logged in");
        Ok(user)
    }

    /// Sign out, clearing the current and persisted session
    pub async fn logout(&self) -> Result<(), AuthError> {
        *self.current.write().await = None;
        self.storage
            .remove(USER_STORAGE_KEY)
            .await
            .context("Failed to clear user session")?;
        tracing::info!("User logged out");
        Ok(())
    }

    /// Load the persisted session, if any
    ///
    /// A stored record that cannot be decoded is logged and removed, and the
    /// service starts signed out.
    pub async fn restore(&self) -> Option<AuthUser> {
        let restored = match self.storage.get::<AuthUser>(USER_STORAGE_KEY).await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Failed to parse saved user: {:#}", e);
                if let Err(e) = self.storage.remove(USER_STORAGE_KEY).await {
                    tracing::warn!("Failed to remove unreadable session: {:#}", e);
                }
                None
            }
        };

        if let Some(ref user) = restored {
            tracing::info!(username = %user.username, "Restored saved session");
        }
        *self.current.write().await = restored.clone();
        restored
    }

    /// The signed-in user, if any
    pub async fn current_user(&self) -> Option<AuthUser> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn is_admin(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .map(|user| user.is_admin)
            .unwrap_or(false)
    }
}
