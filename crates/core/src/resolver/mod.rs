//! Resource graph resolution
//!
//! Turns a JSON:API response (primary `data` plus sidecar `included`) into
//! denormalized domain entities by joining the two collections on
//! relationship identifiers.
//!
//! # Architecture
//!
//! - [`document`]: wire shapes (records, relationships, attribute bags)
//! - [`descriptor`]: the [`Resolvable`] trait each entity kind implements
//! - [`join`]: the single generic join used for collections and single
//!   records alike
//! - [`kinds`]: descriptors for `Location`, `Device` and `Point`
//! - [`history`]: point history decoding (no join)
//!
//! Unmatched relationships are never an error: included-sourced fields keep
//! their empty default, or a sentinel where the kind defines one.

pub mod descriptor;
pub mod document;
pub mod history;
pub mod join;
pub mod kinds;

pub use descriptor::{Contribution, Discriminator, Link, Resolvable};
pub use document::{Attributes, IncludedRecord, PrimaryRecord, Relationship, ResourceIdentifier};
pub use history::decode_history;
pub use join::{resolve_collection, resolve_single};
