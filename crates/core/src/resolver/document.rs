//! JSON:API wire shapes
//!
//! Only the parts of a document the resolver needs are modelled. Attribute
//! bags stay untyped so each entity kind picks the keys it cares about.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Untyped attribute bag of a resource record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Read a top-level attribute as text. Missing keys, null, objects and
    /// arrays read as empty; numbers and booleans are rendered as JSON text.
    pub fn text(&self, key: &str) -> String {
        self.0.get(key).map(value_text).unwrap_or_default()
    }

    /// Read an attribute nested under one or more objects, e.g.
    /// `["pointValue", "value"]`.
    pub fn nested_text(&self, path: &[&str]) -> String {
        let Some((first, rest)) = path.split_first() else {
            return String::new();
        };

        rest.iter()
            .try_fold(self.0.get(*first), |current, key| Some(current?.get(*key)))
            .flatten()
            .map(value_text)
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// `{id, type}` reference to another resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl ResourceIdentifier {
    /// Whether `record_kind` is the type this identifier names. Identifiers
    /// without a type accept any record.
    pub fn names_kind(&self, record_kind: &str) -> bool {
        self.kind.is_empty() || self.kind.eq_ignore_ascii_case(record_kind)
    }
}

/// To-one or to-many relationship linkage
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

/// Named relationship of a record; `data` may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<RelationshipData>,
}

impl Relationship {
    /// Identifiers this relationship points at, skipping empty ids.
    pub fn identifiers(&self) -> impl Iterator<Item = &ResourceIdentifier> {
        let identifiers: &[ResourceIdentifier] = match &self.data {
            Some(RelationshipData::One(identifier)) => std::slice::from_ref(identifier),
            Some(RelationshipData::Many(identifiers)) => identifiers,
            None => &[],
        };
        identifiers.iter().filter(|identifier| !identifier.id.is_empty())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.identifiers().map(|identifier| identifier.id.as_str())
    }
}

pub type Relationships = HashMap<String, Relationship>;

/// Entry of the primary `data` collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrimaryRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Attributes,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relationships: Relationships,
}

/// Entry of the sidecar `included` collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncludedRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Attributes,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relationships: Relationships,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionDocument {
    pub data: Vec<PrimaryRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SingleDocument {
    pub data: PrimaryRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IncludedDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub included: Vec<IncludedRecord>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
