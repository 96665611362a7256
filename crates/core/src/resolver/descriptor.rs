//! Per-kind resolution descriptors
//!
//! An entity kind is described by data, not control flow: how its included
//! records are linked to the primary record, how the entity is seeded from
//! the primary record, and which included `type` contributes which fields.

use buildingx_domain::EntityKind;

use super::document::{Attributes, PrimaryRecord};

/// How included records relate to a primary record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// The kind never joins against `included`.
    Unlinked,
    /// The primary record's named relationship points at included ids
    /// (e.g. a location's `hasPostalAddress`).
    Forward(&'static str),
    /// Each included record's named relationship points back at the
    /// primary id (e.g. a device feature's `hasDevice`).
    Inverse(&'static str),
}

/// Which included `type` values a contribution applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discriminator {
    /// Every linked record, whatever its type.
    Any,
    /// Records whose type equals this name, ignoring ASCII case.
    Named(&'static str),
}

impl Discriminator {
    pub fn accepts(self, kind: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Named(name) => name.eq_ignore_ascii_case(kind),
        }
    }
}

/// Copies fields from a matched included record onto the entity.
pub struct Contribution<E> {
    pub discriminator: Discriminator,
    pub apply: fn(&mut E, &Attributes),
}

/// Entity that the resolver can build from a JSON:API document
pub trait Resolvable: Sized + 'static {
    const KIND: EntityKind;
    const LINK: Link;
    /// Dispatch table applied, in order, to every linked included record.
    const CONTRIBUTIONS: &'static [Contribution<Self>];

    /// Build the entity from the fields the primary record owns.
    fn seed(record: &PrimaryRecord) -> Self;

    /// Fill sentinels once all contributions have been applied.
    fn finalize(&mut self) {}
}
