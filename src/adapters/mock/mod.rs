//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with queued responses per route
//! - [`InMemoryStorage`] - In-memory key/value store

pub mod http;
pub mod storage;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use storage::InMemoryStorage;
