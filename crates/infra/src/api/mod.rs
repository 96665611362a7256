//! Adapters for the BuildingX HTTP API
//!
//! # Architecture
//!
//! - [`auth`]: client-credentials exchange implementing `TokenProvider`
//! - [`executor`]: partition-scoped resource calls implementing
//!   `RestExecutor`
//!
//! Both go through [`HttpClient`](crate::http::HttpClient): one attempt per
//! call with the configured timeout.

pub mod auth;
pub mod executor;

pub use auth::ClientCredentialsTokenProvider;
pub use executor::HttpRestExecutor;
