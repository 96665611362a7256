//! Client-credentials token exchange
//!
//! Exchanges the configured client id and secret for a short-lived bearer
//! token. One POST per call, no retries and no caching: the session decides
//! when a new token is needed.

use async_trait::async_trait;
use buildingx_core::{decode_auth_error, TokenProvider};
use buildingx_domain::constants::{CLIENT_CREDENTIALS_GRANT, JSON_CONTENT_TYPE};
use buildingx_domain::{AccessToken, BuildingXConfig, BuildingXError, ClientCredentials, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
    grant_type: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: i64,
    #[serde(default)]
    token_type: String,
}

/// [`TokenProvider`] backed by an OAuth client-credentials endpoint
pub struct ClientCredentialsTokenProvider {
    http: HttpClient,
    credentials: ClientCredentials,
}

impl ClientCredentialsTokenProvider {
    pub fn new(http: HttpClient, credentials: ClientCredentials) -> Self {
        Self { http, credentials }
    }

    /// Build a provider with its own HTTP client using the configured
    /// timeout.
    pub fn from_config(config: &BuildingXConfig) -> Result<Self> {
        let http = HttpClient::builder().timeout(config.timeout()).build()?;
        Ok(Self::new(http, config.credentials.clone()))
    }

    /// Check the credentials in a fixed order and parse the auth URL.
    fn validate(&self) -> Result<Url> {
        let credentials = &self.credentials;
        let required = [
            (&credentials.client_id, "missing client id"),
            (&credentials.client_secret, "missing client secret"),
            (&credentials.audience, "missing audience"),
            (&credentials.auth_url, "missing authorization URL"),
        ];

        if let Some((_, message)) = required.iter().find(|(value, _)| value.is_empty()) {
            return Err(BuildingXError::Config((*message).to_string()));
        }

        Url::parse(&credentials.auth_url).map_err(|err| InfraError::from(err).into())
    }
}

#[async_trait]
impl TokenProvider for ClientCredentialsTokenProvider {
    #[instrument(skip(self), fields(audience = %self.credentials.audience))]
    async fn acquire_token(&self) -> Result<AccessToken> {
        let url = self.validate()?;

        let body = TokenRequest {
            client_id: &self.credentials.client_id,
            client_secret: &self.credentials.client_secret,
            audience: &self.credentials.audience,
            grant_type: CLIENT_CREDENTIALS_GRANT,
        };

        let request = self
            .http
            .request(Method::POST, url)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(&body);

        let response = self.http.send(request).await?;
        let status = response.status();
        let payload =
            response.bytes().await.map_err(|err| BuildingXError::from(InfraError::from(err)))?;

        if status != StatusCode::OK {
            let err = decode_auth_error(status.as_u16(), &payload);
            warn!(%status, error = err.label(), "token exchange rejected");
            return Err(err);
        }

        let decoded: TokenResponse = serde_json::from_slice(&payload).map_err(|err| {
            BuildingXError::response_format(format!("token response: {err}"), &payload)
        })?;

        if decoded.access_token.is_empty() {
            return Err(BuildingXError::response_format(
                "token response: empty access_token",
                &payload,
            ));
        }

        debug!(expires_in = decoded.expires_in, "access token acquired");
        Ok(AccessToken::new(decoded.access_token, decoded.token_type, decoded.expires_in))
    }
}

impl std::fmt::Debug for ClientCredentialsTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentialsTokenProvider")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
