//! `/dogs` endpoints.

use serde::Deserialize;

use super::FetchClient;
use crate::error::ApiResult;
use crate::models::{Dog, SearchDogsParams, SearchDogsResponse};

/// Largest id list the batch endpoints accept in one request.
pub const MAX_IDS_PER_REQUEST: usize = 100;

#[derive(Debug, Deserialize)]
struct MatchResponse {
    #[serde(rename = "match")]
    matched: String,
}

impl FetchClient {
    /// `GET /dogs/breeds`.
    pub async fn breeds(&self) -> ApiResult<Vec<String>> {
        self.get_json("/dogs/breeds", &[]).await
    }

    /// `GET /dogs/search`.
    pub async fn search_dogs(&self, params: &SearchDogsParams) -> ApiResult<SearchDogsResponse> {
        self.get_json("/dogs/search", &params.to_query_pairs())
            .await
    }

    /// `POST /dogs`, split into requests of at most [`MAX_IDS_PER_REQUEST`].
    ///
    /// The server does not guarantee result order.
    pub async fn dogs_by_ids(&self, ids: &[String]) -> ApiResult<Vec<Dog>> {
        let mut dogs = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(MAX_IDS_PER_REQUEST) {
            let batch: Vec<Dog> = self.post_json("/dogs", chunk).await?;
            dogs.extend(batch);
        }
        Ok(dogs)
    }

    /// `POST /dogs/match`. Returns the id the server picked from `ids`.
    pub async fn match_dog(&self, ids: &[String]) -> ApiResult<String> {
        let response: MatchResponse = self.post_json("/dogs/match", ids).await?;
        Ok(response.matched)
    }
}
