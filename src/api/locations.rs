//! `/locations` endpoints.

use super::dogs::MAX_IDS_PER_REQUEST;
use super::FetchClient;
use crate::error::ApiResult;
use crate::models::{Location, LocationSearchParams, LocationSearchResponse};

impl FetchClient {
    /// `POST /locations`, split into requests of at most 100 ZIP codes.
    pub async fn locations_by_zip(&self, zip_codes: &[String]) -> ApiResult<Vec<Location>> {
        let mut locations = Vec::with_capacity(zip_codes.len());
        for chunk in zip_codes.chunks(MAX_IDS_PER_REQUEST) {
            let batch: Vec<Location> = self.post_json("/locations", chunk).await?;
            locations.extend(batch);
        }
        Ok(locations)
    }

    /// `POST /locations/search`.
    pub async fn search_locations(
        &self,
        params: &LocationSearchParams,
    ) -> ApiResult<LocationSearchResponse> {
        self.post_json("/locations/search", params).await
    }
}
