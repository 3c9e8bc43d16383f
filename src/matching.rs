//! "Find my match": the server picks one dog out of the favorites.

use crate::api::FetchClient;
use crate::error::{ApiError, ApiResult};
use crate::models::Dog;

/// Shown in the match modal when either request fails.
pub const MATCH_ERROR_MESSAGE: &str = "Failed to find a match. Please try again.";

/// Content of the match modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Found(Dog),
    Failed(String),
}

/// Single-flight match request plus the modal it opens.
#[derive(Debug, Default)]
pub struct MatchFlow {
    in_flight: bool,
    modal: Option<MatchResult>,
}

impl MatchFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a match over `favorites`.
    ///
    /// Returns the ids to send, or `None` when there are no favorites or a
    /// match is already running.
    pub fn start(&mut self, favorites: &[String]) -> Option<Vec<String>> {
        if favorites.is_empty() || self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(favorites.to_vec())
    }

    /// Settle the request and open the modal with its outcome.
    ///
    /// Returns `false` and leaves the modal alone when no match is running,
    /// e.g. after the request was abandoned.
    pub fn finish(&mut self, result: ApiResult<Dog>) -> bool {
        if !self.in_flight {
            tracing::debug!("Dropping match result with no match in flight");
            return false;
        }
        self.in_flight = false;
        self.modal = Some(match result {
            Ok(dog) => {
                tracing::info!("Matched with {} ({})", dog.name, dog.id);
                MatchResult::Found(dog)
            }
            Err(err) => {
                tracing::warn!("Match failed [{}]: {}", err.error_code(), err);
                MatchResult::Failed(MATCH_ERROR_MESSAGE.to_string())
            }
        });
        true
    }

    /// Settle the request without opening the modal.
    pub fn abandon(&mut self) {
        self.in_flight = false;
        self.modal = None;
    }

    pub fn close(&mut self) {
        self.modal = None;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn modal(&self) -> Option<&MatchResult> {
        self.modal.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_some()
    }
}

/// Ask for a match among `ids` and fetch the matched dog's record.
pub async fn find_match(client: &FetchClient, ids: &[String]) -> ApiResult<Dog> {
    let matched = client.match_dog(ids).await?;
    client
        .dogs_by_ids(std::slice::from_ref(&matched))
        .await?
        .into_iter()
        .find(|dog| dog.id == matched)
        .ok_or_else(|| ApiError::Decode(format!("matched dog {} not returned", matched)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog() -> Dog {
        Dog {
            id: "m".to_string(),
            img: String::new(),
            name: "Max".to_string(),
            age: 4,
            zip_code: "10001".to_string(),
            breed: "Pug".to_string(),
        }
    }

    #[test]
    fn test_empty_favorites_never_start() {
        let mut flow = MatchFlow::new();
        assert!(flow.start(&[]).is_none());
        assert!(!flow.is_in_flight());
    }

    #[test]
    fn test_single_flight() {
        let mut flow = MatchFlow::new();
        let ids = vec!["a".to_string()];
        assert_eq!(flow.start(&ids), Some(ids.clone()));
        assert!(flow.start(&ids).is_none());
    }

    #[test]
    fn test_modal_opens_on_success_and_failure() {
        let mut flow = MatchFlow::new();
        flow.start(&["a".to_string()]);
        flow.finish(Ok(dog()));
        assert_eq!(flow.modal(), Some(&MatchResult::Found(dog())));
        flow.close();
        assert!(!flow.is_open());

        flow.start(&["a".to_string()]);
        flow.finish(Err(ApiError::Decode("x".to_string())));
        assert_eq!(
            flow.modal(),
            Some(&MatchResult::Failed(MATCH_ERROR_MESSAGE.to_string()))
        );
        assert!(!flow.is_in_flight());
    }

    #[test]
    fn test_result_after_abandon_is_dropped() {
        let mut flow = MatchFlow::new();
        flow.start(&["a".to_string()]);
        flow.abandon();

        assert!(!flow.finish(Ok(dog())));
        assert!(!flow.is_open());
        assert!(!flow.is_in_flight());
    }
}
