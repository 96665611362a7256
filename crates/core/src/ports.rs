//! Port interfaces for authentication and request execution
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use buildingx_domain::{AccessToken, ApiRequest, Result};

/// Trait for exchanging client credentials for a bearer token
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Acquire a fresh access token. Implementations perform exactly one
    /// exchange and never retry.
    async fn acquire_token(&self) -> Result<AccessToken>;
}

/// Trait for issuing a single authenticated call against the resource API
#[async_trait]
pub trait RestExecutor: Send + Sync {
    /// Execute the request and return the raw success body.
    ///
    /// Non-success responses are decoded into
    /// [`BuildingXError::Api`](buildingx_domain::BuildingXError::Api).
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>>;
}
