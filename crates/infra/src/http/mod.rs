//! HTTP transport shared by the token provider and the REST executor

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
