//! # Configuration
//!
//! Shell settings with built-in defaults and an optional JSON override
//! kept in localStorage.

use serde::{Deserialize, Serialize};

use crate::services::browser;

/// localStorage key holding the JSON override.
pub const CONFIG_STORAGE_KEY: &str = "puppy_mart.config";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Label shown in the side menu header.
    pub brand_name: String,

    /// localStorage key of the signed-in user JSON.
    pub user_storage_key: String,

    /// localStorage key of the auth token.
    pub token_storage_key: String,

    /// Question asked before signing out.
    pub logout_prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand_name: "Puppy Digital Mart".to_string(),
            user_storage_key: "user".to_string(),
            token_storage_key: "token".to_string(),
            logout_prompt: "Are you sure you want to logout?".to_string(),
        }
    }
}

impl Config {
    /// Parses an override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads the override from localStorage, or returns defaults.
    pub fn load() -> Self {
        let raw = match browser::storage_get(CONFIG_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No config override, using defaults");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not read config, using defaults");
                return Self::default();
            }
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                tracing::info!("Loaded configuration override");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }
}
