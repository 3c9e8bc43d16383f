//! AppMessage enum for async communication within the application.

use crate::error::ApiResult;
use crate::models::{AuthUser, Dog};
use crate::search::SearchPage;

use super::types::AuthMode;

/// Messages received from spawned network tasks
#[derive(Debug)]
pub enum AppMessage {
    /// Startup session check settled. The check fetches the breed list.
    SessionChecked {
        result: ApiResult<Vec<String>>,
        /// Whether a stored session cookie was sent with the check
        had_cookie: bool,
    },
    /// Breed list for the filter loaded
    BreedsLoaded {
        /// Session epoch the request was issued in
        epoch: u64,
        result: ApiResult<Vec<String>>,
    },
    /// Search (ids + records) for a generation finished
    SearchFinished {
        generation: u64,
        result: ApiResult<SearchPage>,
    },
    /// Favorite dog records for a generation resolved
    FavoriteDogsLoaded {
        generation: u64,
        result: ApiResult<Vec<Dog>>,
    },
    /// Login or signup request finished
    LoginFinished {
        mode: AuthMode,
        user: AuthUser,
        result: ApiResult<()>,
    },
    /// Logout request finished (local state is cleared either way)
    LogoutFinished { result: ApiResult<()> },
    /// Match request (match + record lookup) finished
    MatchFinished {
        /// Session epoch the request was issued in
        epoch: u64,
        result: ApiResult<Dog>,
    },
}
