//! Request descriptors shared between the service and the REST executor

use serde::{Deserialize, Serialize};

use crate::constants::{JSON_CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE};
use crate::impl_domain_label_conversions;

/// HTTP verbs supported by the resource endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Patch,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }

    /// Content type sent with the request body.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Patch => JSON_PATCH_CONTENT_TYPE,
            Self::Get | Self::Post => JSON_CONTENT_TYPE,
        }
    }

    /// Whether a bodiless `204 No Content` counts as success.
    pub fn accepts_no_content(self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity kinds produced by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Location,
    Device,
    Point,
    PointHistory,
}

impl_domain_label_conversions!(EntityKind {
    Location => "location",
    Device => "device",
    Point => "point",
    PointHistory => "point_history",
});

/// A single call against `<endpoint>/operations/partitions/<partition>/<path>`
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub partition: String,
    pub token: String,
    /// Path relative to the partition, including any query string
    pub path: String,
    pub verb: Verb,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// GET request without a body
    pub fn get(partition: impl Into<String>, token: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            token: token.into(),
            path: path.into(),
            verb: Verb::Get,
            body: None,
        }
    }

    /// Attach a request body and switch to the given verb.
    #[must_use]
    pub fn with_body(mut self, verb: Verb, body: Vec<u8>) -> Self {
        self.verb = verb;
        self.body = Some(body);
        self
    }
}

impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("partition", &self.partition)
            .field("token", &"<redacted>")
            .field("path", &self.path)
            .field("verb", &self.verb)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn patch_uses_json_patch_content_type() {
        assert_eq!(Verb::Patch.content_type(), "application/json-patch+json");
        assert_eq!(Verb::Get.content_type(), "application/json");
        assert_eq!(Verb::Post.content_type(), "application/json");
    }

    #[test]
    fn only_mutating_verbs_accept_no_content() {
        assert!(!Verb::Get.accepts_no_content());
        assert!(Verb::Post.accepts_no_content());
        assert!(Verb::Patch.accepts_no_content());
    }

    #[test]
    fn entity_kind_labels() {
        assert_eq!(EntityKind::PointHistory.to_string(), "point_history");
        assert_eq!(EntityKind::from_str("Device").unwrap(), EntityKind::Device);
    }

    #[test]
    fn request_debug_hides_token() {
        let request = ApiRequest::get("p1", "jwt-value", "devices");
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("jwt-value"));
        assert!(rendered.contains("devices"));
    }

    #[test]
    fn with_body_switches_verb() {
        let request = ApiRequest::get("p1", "t", "points/1").with_body(Verb::Patch, b"[]".to_vec());
        assert_eq!(request.verb, Verb::Patch);
        assert_eq!(request.body.as_deref(), Some(&b"[]"[..]));
    }
}
