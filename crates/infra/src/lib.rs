//! # BuildingX Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - HTTP transport (reqwest)
//! - Client-credentials token provider
//! - REST executor for the partition-scoped resource API
//! - Configuration loading (environment, `.env`, TOML/JSON files)
//!
//! ## Architecture
//! - Implements traits defined in `buildingx-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{ClientCredentialsTokenProvider, HttpRestExecutor};
pub use client::ClientBuilder;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
