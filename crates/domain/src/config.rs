//! Client configuration structures
//!
//! Values are validated where they are used (token acquisition, request
//! execution), not when the configuration is built, so an operation that does
//! not need a value never fails because it is absent.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Long-lived client credentials exchanged for a bearer token.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub audience: String,
    pub auth_url: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("audience", &self.audience)
            .field("auth_url", &self.auth_url)
            .finish()
    }
}

/// Full client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingXConfig {
    #[serde(flatten)]
    pub credentials: ClientCredentials,
    /// API root, e.g. `https://api.example.com/api/v1`
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl BuildingXConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BuildingXConfig {
    fn default() -> Self {
        Self {
            credentials: ClientCredentials::default(),
            endpoint: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
