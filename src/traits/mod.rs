//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport (GET, POST)
//! - [`KeyValueStore`] - Local device storage

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::{KeyValueStore, StorageError};
