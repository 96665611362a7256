//! Decoding of non-success response bodies
//!
//! Resource endpoints answer failures with a JSON:API error envelope
//! (`{"errors": [{status, title, detail, ...}]}`); older deployments return a
//! bare `{"detail": "..."}`. The token endpoint may also answer in the OAuth
//! shape (`error` / `error_description`).

use buildingx_domain::constants::NO_ERROR_DETAIL;
use buildingx_domain::BuildingXError;
use serde::Deserialize;
use serde_json::Value;

use crate::resolver::document::value_text;

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Option<Value>,
    #[serde(default)]
    detail: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    error_description: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorObject {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    detail: Option<Value>,
}

fn non_empty(value: Option<&Value>) -> Option<String> {
    value.map(value_text).filter(|text| !text.is_empty())
}

fn parse(body: &[u8]) -> ErrorEnvelope {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Map a failed resource call to [`BuildingXError::Api`].
///
/// The first entry of `errors` wins; its `status` falls back to the HTTP
/// status and its `detail` falls back to `title`, then `code`.
pub fn decode_error_response(status: u16, body: &[u8]) -> BuildingXError {
    let envelope = parse(body);
    let http_status = status.to_string();

    let first = envelope
        .errors
        .as_ref()
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|entry| serde_json::from_value::<ErrorObject>(entry.clone()).ok());

    if let Some(first) = first {
        let detail = non_empty(first.detail.as_ref())
            .or_else(|| non_empty(first.title.as_ref()))
            .or_else(|| non_empty(first.code.as_ref()))
            .unwrap_or_else(|| NO_ERROR_DETAIL.to_string());

        return BuildingXError::Api {
            status: non_empty(first.status.as_ref()).unwrap_or(http_status),
            detail,
        };
    }

    BuildingXError::Api {
        status: http_status,
        detail: non_empty(envelope.detail.as_ref())
            .unwrap_or_else(|| NO_ERROR_DETAIL.to_string()),
    }
}

/// Map a rejected token exchange to [`BuildingXError::Auth`].
pub fn decode_auth_error(status: u16, body: &[u8]) -> BuildingXError {
    let envelope = parse(body);

    let message = non_empty(envelope.detail.as_ref())
        .or_else(|| non_empty(envelope.error_description.as_ref()))
        .or_else(|| non_empty(envelope.error.as_ref()));

    match message {
        Some(message) => BuildingXError::Auth(format!("error message from BuildingX: {message}")),
        None => BuildingXError::Auth(format!(
            "token endpoint returned status {status} with no additional information"
        )),
    }
}
