//! Error types.
//!
//! | Error | Raised by | Surfaced as |
//! |-------|-----------|-------------|
//! | [`ApiError::SessionExpired`] | any API call answered 401/403 | navigation to login |
//! | [`ApiError`] (other) | API calls | inline banner, modal or form message |
//! | [`StorageError`] | local storage | logged, never shown |
//!
//! The binary itself reports setup failures through `color_eyre`.

mod api;

pub use api::{ApiError, ApiResult};
pub use crate::traits::StorageError;
