//! Bearer tokens obtained through the client-credentials exchange

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::BEARER_TOKEN_TYPE;

/// Short-lived bearer credential with expiry metadata
///
/// `expires_at` is derived from `expires_in` at the moment the token is
/// created, so it reflects when this client received the token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds as reported by the auth server
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Create a new token with calculated expiration time
    #[must_use]
    pub fn new(access_token: String, token_type: String, expires_in: i64) -> Self {
        // Lifetimes beyond what `DateTime` can represent carry no expiry.
        let expires_at = if expires_in > 0 {
            chrono::Duration::try_seconds(expires_in)
                .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
        } else {
            None
        };

        let token_type =
            if token_type.is_empty() { BEARER_TOKEN_TYPE.to_string() } else { token_type };

        Self { access_token, token_type, expires_in, expires_at }
    }

    /// The raw credential sent in the `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.access_token
    }

    /// Check if the token is expired or will expire within the threshold
    ///
    /// Tokens without an expiry are treated as valid.
    #[must_use]
    pub fn is_expired(&self, threshold_seconds: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => chrono::Duration::try_seconds(threshold_seconds)
                .and_then(|threshold| Utc::now().checked_add_signed(threshold))
                .map_or(true, |horizon| horizon >= expires_at),
            None => false,
        }
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
