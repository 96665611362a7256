//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the BuildingX client
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum BuildingXError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session is not initialized")]
    SessionNotInitialized,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("API error (status {status}): {detail}")]
    Api { status: String, detail: String },

    /// A success response whose body did not have the expected shape. The raw
    /// payload is kept so API contract drift can be diagnosed.
    #[error("Error parsing {context}. Payload submitted: {payload}")]
    ResponseFormat { context: String, payload: String },
}

impl BuildingXError {
    /// Build a [`BuildingXError::ResponseFormat`] from raw response bytes.
    pub fn response_format(context: impl Into<String>, payload: &[u8]) -> Self {
        Self::ResponseFormat {
            context: context.into(),
            payload: String::from_utf8_lossy(payload).into_owned(),
        }
    }

    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::SessionNotInitialized => "session_not_initialized",
            Self::InvalidInput(_) => "invalid_input",
            Self::Transport(_) => "transport",
            Self::Auth(_) => "auth",
            Self::Api { .. } => "api",
            Self::ResponseFormat { .. } => "response_format",
        }
    }

    /// Raw payload carried by a response-format error, if any.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::ResponseFormat { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Result type alias for BuildingX operations
pub type Result<T> = std::result::Result<T, BuildingXError>;
