//! Authenticated session bound to one partition

use std::sync::Arc;

use buildingx_domain::{AccessToken, BuildingXError, Result};
use tracing::{debug, info, warn};

use crate::ports::TokenProvider;

/// Session state. A partition without a token (or the reverse) cannot be
/// represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Ready {
        partition: String,
        token: AccessToken,
    },
}

/// Holds the partition and bearer token every resource call needs.
///
/// Any failure during [`Session::initialize`] leaves the session
/// [`SessionState::Uninitialized`], including when it was previously ready.
pub struct Session {
    state: SessionState,
    tokens: Arc<dyn TokenProvider>,
}

impl Session {
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self { state: SessionState::Uninitialized, tokens }
    }

    /// Bind the session to `partition` and acquire a fresh token.
    ///
    /// # Errors
    /// - [`BuildingXError::InvalidInput`] if `partition` is empty
    /// - whatever the token provider returns
    pub async fn initialize(&mut self, partition: &str) -> Result<()> {
        self.invalidate();

        if partition.is_empty() {
            warn!("rejected session initialization with empty partition");
            return Err(BuildingXError::InvalidInput("partition must not be empty".to_string()));
        }

        debug!(partition, "acquiring access token");
        let token = match self.tokens.acquire_token().await {
            Ok(token) => token,
            Err(err) => {
                warn!(partition, error = err.label(), "session initialization failed");
                return Err(err);
            }
        };

        if token.secret().is_empty() {
            warn!(partition, "token provider returned an empty token");
            return Err(BuildingXError::Auth("token provider returned an empty token".to_string()));
        }

        info!(partition, expires_in = token.expires_in, "session initialized");
        self.state = SessionState::Ready { partition: partition.to_string(), token };
        Ok(())
    }

    /// Drop the partition and token. Safe to call in any state.
    pub fn invalidate(&mut self) {
        if self.is_initialized() {
            info!("session invalidated");
        }
        self.state = SessionState::Uninitialized;
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, SessionState::Ready { .. })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn partition(&self) -> Option<&str> {
        match &self.state {
            SessionState::Ready { partition, .. } => Some(partition),
            SessionState::Uninitialized => None,
        }
    }

    pub fn token(&self) -> Option<&AccessToken> {
        match &self.state {
            SessionState::Ready { token, .. } => Some(token),
            SessionState::Uninitialized => None,
        }
    }

    /// Partition and token for a resource call.
    ///
    /// # Errors
    /// [`BuildingXError::SessionNotInitialized`] before a successful
    /// [`Session::initialize`].
    pub fn credentials(&self) -> Result<(&str, &AccessToken)> {
        match &self.state {
            SessionState::Ready { partition, token } => Ok((partition, token)),
            SessionState::Uninitialized => Err(BuildingXError::SessionNotInitialized),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("state", &self.state).finish_non_exhaustive()
    }
}
