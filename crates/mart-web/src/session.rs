//! # Session
//!
//! The signed-in user as stored by the login flow, and the browser-backed
//! session accessor.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::PlatformError;
use crate::services::{browser, SessionStore};

/// Account role. Only the exact string `"admin"` maps to [`Role::Admin`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Regular customer; also the fallback for unknown roles.
    #[default]
    User,
}

impl Role {
    /// Role string written by the backend for administrators.
    pub const ADMIN: &'static str = "admin";

    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => Self::ADMIN,
            Self::User => "user",
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        if value == Self::ADMIN {
            Self::Admin
        } else {
            Self::User
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// The signed-in user as persisted by the login flow.
///
/// Extra fields written by the backend are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, if the backend sent one.
    #[serde(default, alias = "name")]
    pub username: Option<String>,

    /// Account role.
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Whether this user sees the admin navigation.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Parses the stored user JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Session accessor backed by `window.localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    user_key: String,
    token_key: String,
}

impl BrowserSession {
    /// Creates an accessor using the storage keys from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            user_key: config.user_storage_key.clone(),
            token_key: config.token_storage_key.clone(),
        }
    }
}

impl SessionStore for BrowserSession {
    fn current_user(&self) -> Option<User> {
        let raw = match browser::storage_get(&self.user_key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored user");
                return None;
            }
        };

        match User::from_json(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(key = %self.user_key, error = %e, "Ignoring malformed stored user");
                None
            }
        }
    }

    fn clear_auth(&self) -> Result<(), PlatformError> {
        browser::storage_remove(&self.token_key)?;
        browser::storage_remove(&self.user_key)?;
        tracing::info!("Cleared stored session");
        Ok(())
    }
}
