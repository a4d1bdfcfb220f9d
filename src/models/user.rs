//! Authenticated user model
//!
//! The demo has exactly one account. After a successful login its record is
//! persisted in client storage and restored on the next start.

use serde::{Deserialize, Serialize};

/// Identifier given to the single admin account
pub const ADMIN_USER_ID: &str = "1";

/// Session record for the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Unique identifier
    pub id: String,
    /// Login name
    pub username: String,
    /// Whether the user may use the admin surface
    pub is_admin: bool,
}

impl AuthUser {
    /// Create the admin record for the given username
    pub fn admin(username: impl Into<String>) -> Self {
        Self {
            id: ADMIN_USER_ID.to_string(),
            username: username.into(),
            is_admin: true,
        }
    }
}
