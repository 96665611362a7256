//! Primary/included join
//!
//! Included records are indexed once by the id they link through, so the
//! join is O(P + I). Matches are always applied in `included` order, which
//! makes the outcome identical to a linear scan per primary record: when two
//! records contribute the same field, the later one wins.

use std::collections::HashMap;

use buildingx_domain::{BuildingXError, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::descriptor::{Link, Resolvable};
use super::document::{
    CollectionDocument, IncludedDocument, IncludedRecord, PrimaryRecord, SingleDocument,
};

/// Resolve a `{data: [...], included: [...]}` payload into entities, in the
/// order of the primary collection.
///
/// # Errors
/// Returns [`BuildingXError::ResponseFormat`] carrying the raw payload if
/// either collection fails to decode.
pub fn resolve_collection<E: Resolvable>(payload: &[u8]) -> Result<Vec<E>> {
    let document: CollectionDocument = decode(payload, &format!("{} response", E::KIND))?;
    let included = decode_included::<E>(payload)?;
    let index = IncludedIndex::build(E::LINK, &included);

    debug!(
        kind = %E::KIND,
        primary = document.data.len(),
        included = included.len(),
        "resolving collection"
    );

    Ok(document.data.iter().map(|record| resolve_record(record, &index, &included)).collect())
}

/// Resolve a `{data: {...}, included: [...]}` payload into one entity.
///
/// # Errors
/// Same as [`resolve_collection`].
pub fn resolve_single<E: Resolvable>(payload: &[u8]) -> Result<E> {
    let document: SingleDocument = decode(payload, &format!("{} response", E::KIND))?;
    let included = decode_included::<E>(payload)?;
    let index = IncludedIndex::build(E::LINK, &included);

    Ok(resolve_record(&document.data, &index, &included))
}

fn resolve_record<E: Resolvable>(
    primary: &PrimaryRecord,
    index: &IncludedIndex<'_>,
    included: &[IncludedRecord],
) -> E {
    let mut entity = E::seed(primary);

    for position in index.matches(E::LINK, primary) {
        let record = &included[position];
        for contribution in E::CONTRIBUTIONS {
            if contribution.discriminator.accepts(&record.kind) {
                (contribution.apply)(&mut entity, &record.attributes);
            }
        }
    }

    entity.finalize();
    entity
}

fn decode_included<E: Resolvable>(payload: &[u8]) -> Result<Vec<IncludedRecord>> {
    let document: IncludedDocument =
        decode(payload, &format!("{} response (included section)", E::KIND))?;
    Ok(document.included)
}

pub(crate) fn decode<T: DeserializeOwned>(payload: &[u8], context: &str) -> Result<T> {
    serde_json::from_slice(payload).map_err(|err| {
        debug!(context, error = %err, "response body did not match the expected shape");
        BuildingXError::response_format(format!("{context}: {err}"), payload)
    })
}

/// Positions of included records keyed by the id they link through
struct IncludedIndex<'a> {
    records: &'a [IncludedRecord],
    positions: HashMap<&'a str, Vec<usize>>,
}

impl<'a> IncludedIndex<'a> {
    fn build(link: Link, included: &'a [IncludedRecord]) -> Self {
        let mut positions: HashMap<&'a str, Vec<usize>> = HashMap::new();

        for (position, record) in included.iter().enumerate() {
            match link {
                Link::Unlinked => break,
                Link::Forward(_) => {
                    if !record.id.is_empty() {
                        positions.entry(record.id.as_str()).or_default().push(position);
                    }
                }
                Link::Inverse(name) => {
                    for owner in record.relationships.get(name).into_iter().flat_map(|r| r.ids()) {
                        positions.entry(owner).or_default().push(position);
                    }
                }
            }
        }

        Self { records: included, positions }
    }

    /// Included positions linked to `primary`, ascending and de-duplicated.
    fn matches(&self, link: Link, primary: &PrimaryRecord) -> Vec<usize> {
        let mut matched: Vec<usize> = match link {
            Link::Unlinked => Vec::new(),
            // Ids are only unique within a type.
            Link::Forward(name) => primary
                .relationships
                .get(name)
                .into_iter()
                .flat_map(|relationship| relationship.identifiers())
                .flat_map(|identifier| {
                    self.positions
                        .get(identifier.id.as_str())
                        .into_iter()
                        .flatten()
                        .copied()
                        .filter(move |&position| {
                            identifier.names_kind(&self.records[position].kind)
                        })
                })
                .collect(),
            Link::Inverse(_) => self.positions.get(primary.id.as_str()).cloned().unwrap_or_default(),
        };

        matched.sort_unstable();
        matched.dedup();
        matched
    }
}
