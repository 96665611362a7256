//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use buildingx_infra::config;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "client_id": "integration-client",
        "client_secret": "integration-secret",
        "audience": "https://horizon.example.com",
        "auth_url": "https://login.example.com/oauth/token",
        "endpoint": "https://api.example.com/api/v1",
        "timeout_secs": 12
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    assert!(result.is_ok(), "Failed to load config from JSON file");

    let config = result.unwrap();
    assert_eq!(config.credentials.client_id, "integration-client");
    assert_eq!(config.credentials.client_secret, "integration-secret");
    assert_eq!(config.credentials.audience, "https://horizon.example.com");
    assert_eq!(config.credentials.auth_url, "https://login.example.com/oauth/token");
    assert_eq!(config.endpoint, "https://api.example.com/api/v1");
    assert_eq!(config.timeout_secs, 12);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
client_id = "toml-client"
client_secret = "toml-secret"
audience = "aud"
auth_url = "https://login.example.com/oauth/token"
endpoint = "https://api.example.com/api/v1"
"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("TOML config should load");

    assert_eq!(config.credentials.client_id, "toml-client");
    assert_eq!(config.endpoint, "https://api.example.com/api/v1");
    assert_eq!(config.timeout_secs, 20, "timeout should fall back to the default");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_partial_file_is_accepted() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(br#"{"endpoint": "https://api.example.com"}"#).unwrap();

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("partial config should load");

    assert_eq!(config.endpoint, "https://api.example.com");
    assert!(config.credentials.client_secret.is_empty());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(b"endpoint: https://api.example.com").unwrap();

    let path = temp_file.path().with_extension("yaml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    assert!(result.is_err(), "YAML is not a supported format");

    std::fs::remove_file(path).ok();
}
