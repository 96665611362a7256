//! Field devices and gateways

use serde::{Deserialize, Serialize};

/// A device or gateway, with its feature records (device info, connectivity)
/// folded into flat fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    pub description: String,
    pub model: String,
    pub serial: String,
    /// Connectivity status reported by the API, or
    /// [`UNKNOWN_STATUS`](crate::constants::UNKNOWN_STATUS) when the
    /// response carried no connectivity record for this device.
    pub online_status: String,
}

impl Device {
    /// Gateways are identified by their hardware model.
    pub fn is_gateway(&self) -> bool {
        matches!(self.model.to_ascii_lowercase().as_str(), "x300" | "x200")
    }
}
