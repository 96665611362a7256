use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use buildingx_core::{RestExecutor, TokenProvider};
use buildingx_domain::{AccessToken, ApiRequest, BuildingXError, Result as DomainResult};

/// Token provider that always returns the same result.
#[derive(Clone)]
pub struct StaticTokenProvider {
    result: DomainResult<AccessToken>,
    calls: Arc<Mutex<usize>>,
}

impl StaticTokenProvider {
    pub fn token(value: &str) -> Self {
        Self::with_result(Ok(AccessToken::new(value.to_string(), "Bearer".to_string(), 3600)))
    }

    pub fn failing(err: BuildingXError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: DomainResult<AccessToken>) -> Self {
        Self { result, calls: Arc::new(Mutex::new(0)) }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn acquire_token(&self) -> DomainResult<AccessToken> {
        *self.calls.lock().unwrap() += 1;
        self.result.clone()
    }
}

/// In-memory executor that replays queued responses and records every
/// request it receives.
#[derive(Default, Clone)]
pub struct RecordingExecutor {
    responses: Arc<Mutex<VecDeque<DomainResult<Vec<u8>>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON body.
    pub fn respond_json(self, body: serde_json::Value) -> Self {
        let bytes = serde_json::to_vec(&body).unwrap();
        self.responses.lock().unwrap().push_back(Ok(bytes));
        self
    }

    /// Queue a raw body, useful for malformed payloads.
    pub fn respond_raw(self, body: &[u8]) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body.to_vec()));
        self
    }

    pub fn fail_with(self, err: BuildingXError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RestExecutor for RecordingExecutor {
    async fn execute(&self, request: ApiRequest) -> DomainResult<Vec<u8>> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BuildingXError::Transport("no queued response".to_string())))
    }
}
