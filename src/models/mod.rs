//! Wire and domain types shared by the API bindings and the UI.

mod dog;
mod location;
mod search;
mod user;

pub use dog::{arrange_by_ids, Dog};
pub use location::{Coordinates, GeoBoundingBox, Location, LocationSearchParams, LocationSearchResponse};
pub use search::{
    SearchDogsParams, SearchDogsResponse, SortDirection, SortField, SortSpec, SortSpecParseError,
};
pub use user::{AuthUser, LoginRequest};
