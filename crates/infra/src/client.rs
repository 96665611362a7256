//! Wiring of the HTTP adapters into a ready-to-use [`BuildingXService`]

use std::sync::Arc;

use buildingx_core::{BuildingXService, RestExecutor, TokenProvider};
use buildingx_domain::{BuildingXConfig, Result};

use crate::api::{ClientCredentialsTokenProvider, HttpRestExecutor};
use crate::config;
use crate::http::HttpClient;

/// Builder for a [`BuildingXService`] backed by the HTTP adapters
///
/// ```no_run
/// # async fn run() -> buildingx_domain::Result<()> {
/// let mut service = buildingx_infra::ClientBuilder::from_env()?.build()?;
/// service.initialize("my-partition").await?;
/// let buildings = service.list_locations().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: BuildingXConfig,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn new(config: BuildingXConfig) -> Self {
        Self { config, user_agent: None }
    }

    /// Start from [`config::load`]: `.env`, config file, then environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(config::load()?))
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn config(&self) -> &BuildingXConfig {
        &self.config
    }

    /// Build the service with an uninitialized session.
    ///
    /// No credential or endpoint is checked here; missing values surface on
    /// [`BuildingXService::initialize`] or the first request.
    pub fn build(self) -> Result<BuildingXService> {
        let mut http = HttpClient::builder().timeout(self.config.timeout());
        if let Some(agent) = self.user_agent {
            http = http.user_agent(agent);
        }
        let http = http.build()?;

        let tokens: Arc<dyn TokenProvider> =
            Arc::new(ClientCredentialsTokenProvider::new(http.clone(), self.config.credentials));
        let executor: Arc<dyn RestExecutor> =
            Arc::new(HttpRestExecutor::new(http, self.config.endpoint));

        tracing::debug!(timeout_secs = self.config.timeout_secs, "BuildingX client built");
        Ok(BuildingXService::new(tokens, executor))
    }
}
