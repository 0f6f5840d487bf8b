use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, BootstrapResult};

pub const ENV_DATABASE: &str = "MONGO_APP_DB";
pub const ENV_USERNAME: &str = "MONGO_APP_USER";
pub const ENV_PASSWORD: &str = "MONGO_APP_PASS";
pub const ENV_COLLECTION: &str = "MONGO_APP_COLL";

const REDACTED: &str = "********";

/// Effective settings for one bootstrap run.
///
/// Each field falls back to a fixed literal when its environment variable is
/// unset or empty. Provided values are taken verbatim.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_database() -> String {
    "cpp-test".to_string()
}

fn default_username() -> String {
    "appuser".to_string()
}

fn default_password() -> String {
    "appsecret".to_string()
}

fn default_collection() -> String {
    "cpp".to_string()
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            username: default_username(),
            password: default_password(),
            collection: default_collection(),
        }
    }
}

impl BootstrapConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, fallback: fn() -> String| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(fallback)
        };

        Self {
            database: read(ENV_DATABASE, default_database),
            username: read(ENV_USERNAME, default_username),
            password: read(ENV_PASSWORD, default_password),
            collection: read(ENV_COLLECTION, default_collection),
        }
    }

    /// Rejects names the server would refuse, so nothing is written for a
    /// config that cannot complete.
    pub fn validate(&self) -> BootstrapResult<()> {
        if self.database.is_empty() {
            return Err(BootstrapError::Config("database name must not be empty".into()));
        }
        if self.username.is_empty() {
            return Err(BootstrapError::Config("username must not be empty".into()));
        }
        if self.collection.is_empty() {
            return Err(BootstrapError::Config("collection name must not be empty".into()));
        }
        Ok(())
    }

    /// Copy safe to print or serialize for display.
    pub fn redacted(&self) -> Self {
        Self {
            password: REDACTED.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for BootstrapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapConfig")
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("collection", &self.collection)
            .finish()
    }
}
