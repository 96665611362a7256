//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! client.

// Network configuration
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const OPERATIONS_PATH: &str = "operations/partitions";

// Authentication
pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

// Content types
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// Sentinel for fields whose source record was not present in the response.
pub const UNKNOWN_STATUS: &str = "Unknown";

/// Marker the API puts in `systemAttributes.writable` for commandable points.
pub const WRITABLE_MARKER: &str = "m:";

/// Fallback detail when an error response carries nothing usable.
pub const NO_ERROR_DETAIL: &str =
    "got non-200 response from BuildingX API with no additional information";

// Environment variables
pub const ENV_CLIENT_ID: &str = "BUILDINGX_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "BUILDINGX_CLIENT_SECRET";
pub const ENV_AUDIENCE: &str = "BUILDINGX_AUDIENCE";
pub const ENV_AUTH_URL: &str = "BUILDINGX_AUTH_URL";
pub const ENV_ENDPOINT: &str = "BUILDINGX_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "BUILDINGX_TIMEOUT_SECS";
