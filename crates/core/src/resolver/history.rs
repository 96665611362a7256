//! Point history decoding
//!
//! History samples are standalone records; nothing is joined against
//! `included`.

use buildingx_domain::{EntityKind, PointHistory, Result};
use serde::Deserialize;

use super::document::Attributes;
use super::join::decode;

#[derive(Debug, Deserialize)]
struct HistoryDocument {
    data: Vec<HistoryRecord>,
}

#[derive(Debug, Deserialize)]
struct HistoryRecord {
    #[serde(default)]
    attributes: Option<Attributes>,
}

/// Decode a `{data: [{attributes: {value, timestamp}}]}` payload, keeping
/// sample order.
///
/// # Errors
/// Returns [`BuildingXError::ResponseFormat`](buildingx_domain::BuildingXError::ResponseFormat)
/// carrying the raw payload if the body does not match.
pub fn decode_history(payload: &[u8]) -> Result<Vec<PointHistory>> {
    let document: HistoryDocument =
        decode(payload, &format!("{} response", EntityKind::PointHistory))?;

    Ok(document
        .data
        .into_iter()
        .map(|record| {
            let attributes = record.attributes.unwrap_or_default();
            PointHistory {
                value: attributes.text("value"),
                timestamp: attributes.text("timestamp"),
            }
        })
        .collect())
}
