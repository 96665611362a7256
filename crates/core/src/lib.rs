//! # BuildingX Core
//!
//! Pure client logic - no HTTP or configuration-loading code.
//!
//! This crate contains:
//! - Port interfaces (traits) for token acquisition and request execution
//! - The session state machine
//! - The resource graph resolver that joins JSON:API `data` and `included`
//! - Error-envelope decoding
//! - The query service exposing the domain operations
//!
//! ## Architecture Principles
//! - Only depends on `buildingx-domain`
//! - All network access goes through [`TokenProvider`] and [`RestExecutor`]
//! - Resolution is pure: bytes in, entities out

pub mod envelope;
pub mod ports;
pub mod query;
pub mod resolver;
pub mod service;
pub mod session;

pub use envelope::{decode_auth_error, decode_error_response};
pub use ports::{RestExecutor, TokenProvider};
pub use resolver::{decode_history, resolve_collection, resolve_single, Resolvable};
pub use service::BuildingXService;
pub use session::{Session, SessionState};
