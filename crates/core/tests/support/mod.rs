//! Shared test helpers for `buildingx-core` integration tests.
//!
//! Lightweight port mocks so service tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod ports;
