//! Bindings for the dog adoption REST API.
//!
//! [`FetchClient`] owns the transport and session cookie; the endpoint
//! methods live in one file per API area.

mod auth;
mod client;
mod dogs;
mod locations;

pub use client::{FetchClient, DEFAULT_API_URL, SESSION_KEY};
pub use dogs::MAX_IDS_PER_REQUEST;
