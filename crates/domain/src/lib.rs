//! # BuildingX Domain
//!
//! Business domain types and models for the BuildingX client.
//!
//! This crate contains:
//! - Domain entities (Location, Device, Point, PointHistory)
//! - Access token and request types shared by the ports
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other BuildingX crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
