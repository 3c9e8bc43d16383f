//! Generation-tagged dog search.
//!
//! Every query change issues a [`SearchTicket`] carrying a fresh generation.
//! The fetch runs elsewhere and hands its result back to
//! [`SearchOrchestrator::complete`], which ignores anything but the newest
//! generation. Results therefore always match the query on screen, no matter
//! in which order responses arrive.

use crate::api::FetchClient;
use crate::error::ApiResult;
use crate::models::{arrange_by_ids, Dog, SearchDogsParams, SortDirection, SortField};

use super::pagination::{clamp_page, page_count};
use super::query::SearchQuery;

/// Inline error shown when a search fails.
pub const SEARCH_ERROR_MESSAGE: &str = "Failed to fetch dogs. Please try again.";

/// A search to run, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub params: SearchDogsParams,
}

/// Both steps of one search: the page of ids and their records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub total: usize,
    pub result_ids: Vec<String>,
    pub dogs: Vec<Dog>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// What [`SearchOrchestrator::complete`] did with a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Applied,
    /// An older generation; nothing changed
    Stale,
    /// Applied, but the page fell outside the new page count and was
    /// clamped. The ticket fetches the clamped page.
    Reclamped(SearchTicket),
}

#[derive(Debug, Default)]
pub struct SearchOrchestrator {
    query: SearchQuery,
    generation: u64,
    status: SearchStatus,
    total: Option<usize>,
    dogs: Vec<Dog>,
}

impl SearchOrchestrator {
    /// Start on 1-based `page`.
    pub fn new(page: usize) -> Self {
        Self {
            query: SearchQuery::at_page(page),
            ..Default::default()
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    /// Total matches of the last successful search.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total.unwrap_or(0))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue a search for the current query.
    pub fn begin(&mut self) -> SearchTicket {
        self.generation += 1;
        self.status = SearchStatus::Loading;
        tracing::debug!(
            "Search generation {} for page {}",
            self.generation,
            self.query.page()
        );
        SearchTicket {
            generation: self.generation,
            params: self.query.to_params(),
        }
    }

    pub fn set_breeds(&mut self, breeds: Vec<String>) -> Option<SearchTicket> {
        self.query.set_breeds(breeds).then(|| self.begin())
    }

    pub fn set_sort_field(&mut self, field: SortField) -> Option<SearchTicket> {
        self.query.set_sort_field(field).then(|| self.begin())
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) -> Option<SearchTicket> {
        self.query.set_sort_direction(direction).then(|| self.begin())
    }

    pub fn set_page(&mut self, page: usize) -> Option<SearchTicket> {
        self.query.set_page(page).then(|| self.begin())
    }

    /// Apply the result of the search tagged `generation`.
    pub fn complete(&mut self, generation: u64, result: ApiResult<SearchPage>) -> SearchOutcome {
        if generation != self.generation {
            tracing::debug!(
                "Dropping stale search response (generation {} < {})",
                generation,
                self.generation
            );
            return SearchOutcome::Stale;
        }

        match result {
            Ok(page) => {
                self.total = Some(page.total);
                self.dogs = page.dogs;
                self.status = SearchStatus::Ready;

                let clamped = clamp_page(self.query.page(), page.total);
                if self.query.set_page(clamped) {
                    tracing::debug!("Page clamped to {}", clamped);
                    return SearchOutcome::Reclamped(self.begin());
                }
                SearchOutcome::Applied
            }
            Err(err) => {
                tracing::warn!("Search failed [{}]: {}", err.error_code(), err);
                self.dogs.clear();
                self.status = SearchStatus::Failed(SEARCH_ERROR_MESSAGE.to_string());
                SearchOutcome::Applied
            }
        }
    }

    /// Drop results and invalidate any search in flight.
    pub fn reset(&mut self, page: usize) {
        let generation = self.generation + 1;
        *self = Self::new(page);
        self.generation = generation;
    }
}

/// Run both steps of a search: the id page, then the records for it.
///
/// Records come back in search order. No ids means no record request.
pub async fn run_search(client: &FetchClient, params: &SearchDogsParams) -> ApiResult<SearchPage> {
    let response = client.search_dogs(params).await?;
    let dogs = if response.result_ids.is_empty() {
        Vec::new()
    } else {
        let dogs = client.dogs_by_ids(&response.result_ids).await?;
        arrange_by_ids(dogs, &response.result_ids)
    };
    Ok(SearchPage {
        total: response.total,
        result_ids: response.result_ids,
        dogs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn dog(id: &str) -> Dog {
        Dog {
            id: id.to_string(),
            img: String::new(),
            name: id.to_string(),
            age: 1,
            zip_code: "00000".to_string(),
            breed: "Pug".to_string(),
        }
    }

    fn page_of(total: usize, ids: &[&str]) -> SearchPage {
        SearchPage {
            total,
            result_ids: ids.iter().map(|s| s.to_string()).collect(),
            dogs: ids.iter().map(|id| dog(id)).collect(),
        }
    }

    #[test]
    fn test_begin_bumps_generation() {
        let mut search = SearchOrchestrator::new(1);
        let first = search.begin();
        let second = search.begin();
        assert_eq!(second.generation, first.generation + 1);
        assert!(search.is_loading());
    }

    #[test]
    fn test_stale_response_never_overwrites() {
        let mut search = SearchOrchestrator::new(1);
        let old = search.begin();
        let new = search.set_breeds(vec!["Pug".to_string()]).unwrap();

        assert_eq!(search.complete(new.generation, Ok(page_of(1, &["new"]))), SearchOutcome::Applied);
        assert_eq!(search.complete(old.generation, Ok(page_of(1, &["old"]))), SearchOutcome::Stale);
        assert_eq!(search.dogs()[0].id, "new");
    }

    #[test]
    fn test_failure_clears_results() {
        let mut search = SearchOrchestrator::new(1);
        let ticket = search.begin();
        search.complete(ticket.generation, Ok(page_of(1, &["a"])));

        let ticket = search.set_page(2).unwrap();
        search.complete(ticket.generation, Err(ApiError::Decode("eof".to_string())));

        assert!(search.dogs().is_empty());
        assert_eq!(
            search.status(),
            &SearchStatus::Failed(SEARCH_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_out_of_range_page_is_reclamped() {
        let mut search = SearchOrchestrator::new(9);
        let ticket = search.begin();
        assert_eq!(ticket.params.from, Some(96));

        match search.complete(ticket.generation, Ok(page_of(30, &[]))) {
            SearchOutcome::Reclamped(next) => {
                assert_eq!(next.params.from, Some(24));
                assert_eq!(search.query().page(), 3);
            }
            other => panic!("expected reclamp, got {:?}", other),
        }
    }

    #[test]
    fn test_unchanged_query_issues_nothing() {
        let mut search = SearchOrchestrator::new(2);
        assert!(search.set_page(2).is_none());
        assert!(search.set_sort_field(SortField::Breed).is_none());
        assert!(search.set_sort_direction(SortDirection::Asc).is_none());
    }

    #[test]
    fn test_reset_invalidates_in_flight() {
        let mut search = SearchOrchestrator::new(1);
        let ticket = search.begin();
        search.reset(1);
        assert_eq!(search.complete(ticket.generation, Ok(page_of(1, &["a"]))), SearchOutcome::Stale);
        assert_eq!(search.status(), &SearchStatus::Idle);
    }
}
