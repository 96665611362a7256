//! Integration tests for domain entities and configuration
//!
//! Covers the serialized shapes callers persist or forward, and the error
//! payloads they log.

use buildingx_domain::{
    AccessToken, BuildingXConfig, BuildingXError, Device, EntityKind, Location, Point,
};
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn test_location_serializes_camel_case() {
    let location = Location {
        id: "l1".into(),
        name: "HQ".into(),
        postal_code: "6300".into(),
        time_zone: "Europe/Zurich".into(),
        ..Default::default()
    };

    let value = serde_json::to_value(&location).unwrap();
    assert_eq!(value["postalCode"], "6300");
    assert_eq!(value["timeZone"], "Europe/Zurich");
    assert!(value.get("postal_code").is_none());
}

#[test]
fn test_point_timestamp_is_optional() {
    let point = Point { id: "p1".into(), writable: true, ..Default::default() };
    let value = serde_json::to_value(&point).unwrap();
    assert_eq!(value["timestamp"], serde_json::Value::Null);
    assert_eq!(value["dataType"], "");

    let stamped = Point {
        timestamp: Some(Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap()),
        ..point
    };
    let value = serde_json::to_value(&stamped).unwrap();
    assert_eq!(value["timestamp"], "2024-02-01T08:30:00Z");
}

#[test]
fn test_device_gateway_detection() {
    let gateway = Device { model: "X300".into(), ..Default::default() };
    let field_device = Device { model: "PXC5.E003".into(), ..Default::default() };

    assert!(gateway.is_gateway());
    assert!(!field_device.is_gateway());
}

#[test]
fn test_config_reads_flat_document() {
    let config: BuildingXConfig = serde_json::from_value(json!({
        "client_id": "id",
        "client_secret": "secret",
        "audience": "aud",
        "auth_url": "https://login.example.com/oauth/token",
        "endpoint": "https://api.example.com/api/v1"
    }))
    .unwrap();

    assert_eq!(config.credentials.client_id, "id");
    assert_eq!(config.credentials.auth_url, "https://login.example.com/oauth/token");
    assert_eq!(config.endpoint, "https://api.example.com/api/v1");
    assert_eq!(config.timeout_secs, 20);
}

#[test]
fn test_config_debug_hides_secret() {
    let mut config = BuildingXConfig::default();
    config.credentials.client_secret = "do-not-log".into();

    assert!(!format!("{config:?}").contains("do-not-log"));
}

#[test]
fn test_error_payload_shape() {
    let err = BuildingXError::Api { status: "404".into(), detail: "device not found".into() };

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["type"], "Api");
    assert_eq!(value["message"]["status"], "404");
    assert_eq!(value["message"]["detail"], "device not found");

    let unit = serde_json::to_value(BuildingXError::SessionNotInitialized).unwrap();
    assert_eq!(unit["type"], "SessionNotInitialized");
}

#[test]
fn test_token_expiry_tracks_lifetime() {
    let token = AccessToken::new("jwt".into(), "Bearer".into(), 120);

    assert!(!token.is_expired(60));
    assert!(token.is_expired(180));
}

#[test]
fn test_entity_kind_labels_parse_back() {
    for kind in [EntityKind::Location, EntityKind::Device, EntityKind::Point, EntityKind::PointHistory] {
        assert_eq!(kind.to_string().parse::<EntityKind>(), Ok(kind));
    }
}
