#![allow(dead_code)]

use std::sync::Once;

use buildingx_domain::{BuildingXConfig, ClientCredentials};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/oauth/token";
pub const API_ROOT: &str = "/api/v1";
pub const PARTITION: &str = "p-1";
pub const TOKEN: &str = "jwt-integration";

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary so `tracing` output
/// shows up with `--nocapture`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Configuration pointing both the token and resource endpoints at `server`.
pub fn config_for(server: &MockServer) -> BuildingXConfig {
    BuildingXConfig {
        credentials: ClientCredentials {
            client_id: "client-1".to_string(),
            client_secret: "secret-1".to_string(),
            audience: "https://horizon.example.com".to_string(),
            auth_url: format!("{}{TOKEN_PATH}", server.uri()),
        },
        endpoint: format!("{}{API_ROOT}", server.uri()),
        timeout_secs: 5,
    }
}

/// Absolute mock path for a resource below the test partition.
pub fn resource_path(relative: &str) -> String {
    format!("{API_ROOT}/operations/partitions/{PARTITION}/{relative}")
}

/// Mount a token endpoint that accepts any credentials.
pub async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;
}
