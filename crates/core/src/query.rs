//! Resource paths for the domain query operations
//!
//! Paths are relative to `<endpoint>/operations/partitions/<partition>/`.
//! Caller-supplied identifiers and timestamps are percent-encoded; the fixed
//! JSON:API query keys are sent as-is.

use chrono::{DateTime, SecondsFormat, Utc};
use urlencoding::encode;

const DEVICE_FEATURES: &str = "hasFeatures.DeviceInfo,hasFeatures.Connectivity";

pub fn locations() -> String {
    "locations?filter[type]=Building&include=hasPostalAddress".to_string()
}

pub fn location(id: &str) -> String {
    format!("locations/{}?include=hasPostalAddress", encode(id))
}

pub fn devices_by_location(location_id: &str) -> String {
    format!(
        "devices?include={DEVICE_FEATURES}&filter[hasLocation.data.id]={}",
        encode(location_id)
    )
}

pub fn devices_by_gateway(gateway_id: &str) -> String {
    format!("devices/{}/devices?include=hasFeatures.DeviceInfo", encode(gateway_id))
}

pub fn all_devices() -> String {
    format!("devices?include={DEVICE_FEATURES}")
}

pub fn device(id: &str) -> String {
    format!("devices/{}?include={DEVICE_FEATURES}", encode(id))
}

pub fn points_by_device(device_id: &str) -> String {
    format!("devices/{}/points?field[Point]=pointValue", encode(device_id))
}

pub fn point(id: &str) -> String {
    format!("points/{}?field[Point]=pointValue", encode(id))
}

pub fn point_history(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!(
        "points/{}/values?filter[timestamp][from]={}&filter[timestamp][to]={}",
        encode(id),
        encode(&format_timestamp(start)),
        encode(&format_timestamp(end)),
    )
}

/// RFC 3339, UTC, second precision: `2024-01-02T03:04:05Z`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}
