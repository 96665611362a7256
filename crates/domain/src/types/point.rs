//! Telemetry points and their history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A data point exposed by a device, with its present value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub id: String,
    pub name: String,
    pub description: String,
    pub data_type: String,
    pub writable: bool,
    pub status: String,
    pub string_value: String,
    /// `None` when the API sent no timestamp or one that is not RFC 3339.
    pub timestamp: Option<DateTime<Utc>>,
}

/// One historical sample of a point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointHistory {
    pub value: String,
    /// ISO-8601 timestamp exactly as sent by the API
    pub timestamp: String,
}
