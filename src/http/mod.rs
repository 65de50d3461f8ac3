//! HTTP adapter module
//!
//! Provides the transport seam used by the pagination engine.
//!
//! # Features
//!
//! - **Adapter Trait**: [`HttpAdapter`] executes one GET and returns status, headers and body
//! - **reqwest Client**: [`HttpClient`] with base URL, timeout and user agent
//! - **Mock Adapter**: [`MockAdapter`] replays canned responses and records requests

mod adapter;
mod client;

pub use adapter::{HttpAdapter, MockAdapter, RawResponse, RecordedRequest};
pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
