//! Configuration loader
//!
//! Builds a [`BuildingXConfig`] from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Variables from a `.env` file (if present) are added to the process
//!    environment without overriding variables that are already set
//! 2. A config file is probed and used as the base, if one exists
//! 3. Environment variables override values from the file
//!
//! Values are not checked for presence here. A missing client secret or
//! endpoint fails the operation that needs it.
//!
//! ## Environment Variables
//! - `BUILDINGX_CLIENT_ID`: OAuth client id
//! - `BUILDINGX_CLIENT_SECRET`: OAuth client secret
//! - `BUILDINGX_AUDIENCE`: Token audience
//! - `BUILDINGX_AUTH_URL`: Token endpoint URL
//! - `BUILDINGX_ENDPOINT`: API root, e.g. `https://api.example.com/api/v1`
//! - `BUILDINGX_TIMEOUT_SECS`: Request timeout in seconds (default 20)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./buildingx.toml` or `./buildingx.json` (current working directory)
//! 2. `../buildingx.toml` or `../buildingx.json` (parent directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use buildingx_domain::constants::{
    ENV_AUDIENCE, ENV_AUTH_URL, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_ENDPOINT, ENV_TIMEOUT_SECS,
};
use buildingx_domain::{BuildingXConfig, BuildingXError, Result};

const CONFIG_FILE_NAMES: [&str; 2] = ["buildingx.toml", "buildingx.json"];

/// Load configuration using every available source
///
/// # Errors
/// Returns `BuildingXError::Config` if a config file exists but cannot be
/// read or parsed, or if `BUILDINGX_TIMEOUT_SECS` is not a number.
pub fn load() -> Result<BuildingXConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => {
            return Err(BuildingXError::Config(format!("Failed to read .env file: {err}")));
        }
    }

    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => BuildingXConfig::default(),
    };

    apply_env_overrides(&mut config)?;
    tracing::info!(
        endpoint = %config.endpoint,
        timeout_secs = config.timeout_secs,
        "Configuration loaded"
    );
    Ok(config)
}

/// Load configuration from environment variables only
///
/// Unset variables keep their defaults.
///
/// # Errors
/// Returns `BuildingXError::Config` if `BUILDINGX_TIMEOUT_SECS` is set but
/// not a number.
pub fn load_from_env() -> Result<BuildingXConfig> {
    let mut config = BuildingXConfig::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Add the variables of a `.env` file to the process environment.
///
/// Variables that are already set are left untouched.
///
/// # Errors
/// Returns `BuildingXError::Config` if the file cannot be read or parsed.
pub fn load_dotenv(path: &Path) -> Result<()> {
    dotenvy::from_path(path).map_err(|err| {
        BuildingXError::Config(format!("Failed to read {}: {err}", path.display()))
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `BuildingXError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<BuildingXConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BuildingXError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BuildingXError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| BuildingXError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<BuildingXConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| BuildingXError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| BuildingXError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(BuildingXError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut directories = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        directories.push(cwd.clone());
        directories.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            directories.push(exe_dir.to_path_buf());
        }
    }

    directories
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Overwrite fields whose environment variable is set and non-empty.
fn apply_env_overrides(config: &mut BuildingXConfig) -> Result<()> {
    let credentials = &mut config.credentials;
    let string_fields = [
        (ENV_CLIENT_ID, &mut credentials.client_id),
        (ENV_CLIENT_SECRET, &mut credentials.client_secret),
        (ENV_AUDIENCE, &mut credentials.audience),
        (ENV_AUTH_URL, &mut credentials.auth_url),
        (ENV_ENDPOINT, &mut config.endpoint),
    ];

    for (key, field) in string_fields {
        if let Some(value) = env_var(key) {
            *field = value;
        }
    }

    if let Some(raw) = env_var(ENV_TIMEOUT_SECS) {
        config.timeout_secs = raw.parse::<u64>().map_err(|e| {
            BuildingXError::Config(format!("Invalid {ENV_TIMEOUT_SECS} value '{raw}': {e}"))
        })?;
    }

    Ok(())
}

/// Read an environment variable, treating empty values as unset.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
