//! Client-side favorites.
//!
//! [`Favorites`] is the ordered id set the user builds up; it is saved to
//! local storage after every change. [`FavoriteDogs`] resolves those ids to
//! full dog records and only asks the server again when the id list changes.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{arrange_by_ids, Dog};
use crate::traits::KeyValueStore;

/// Storage key of the persisted favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Rows shown per page of the favorites panel.
pub const FAVORITES_PER_PAGE: usize = 5;

/// Outcome of [`Favorites::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// Ordered, duplicate-free list of favorite dog ids.
pub struct Favorites {
    ids: Vec<String>,
    storage: Arc<dyn KeyValueStore>,
}

impl Favorites {
    /// Restore the list from storage.
    ///
    /// Missing, unreadable or malformed data all yield an empty list.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let ids = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => dedup(ids),
                Err(err) => {
                    tracing::warn!("Ignoring malformed saved favorites: {}", err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!("Could not read saved favorites: {}", err);
                Vec::new()
            }
        };
        tracing::debug!("Loaded {} favorites", ids.len());
        Self { ids, storage }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Add `id` at the end, or remove it if already present.
    pub fn toggle(&mut self, id: &str) -> FavoriteChange {
        let change = if self.contains(id) {
            self.ids.retain(|fav| fav != id);
            FavoriteChange::Removed
        } else {
            self.ids.push(id.to_string());
            FavoriteChange::Added
        };
        self.persist();
        change
    }

    /// Remove `id`. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|fav| fav != id);
        let removed = self.ids.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Drop every favorite and the saved copy.
    pub fn clear(&mut self) {
        self.ids.clear();
        if let Err(err) = self.storage.remove(FAVORITES_KEY) {
            tracing::warn!("Could not remove saved favorites: {}", err);
        }
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.ids)
            .map_err(|e| e.to_string())
            .and_then(|raw| {
                self.storage
                    .set(FAVORITES_KEY, &raw)
                    .map_err(|e| e.to_string())
            });
        if let Err(err) = result {
            tracing::warn!("Could not save favorites: {}", err);
        }
    }
}

fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

/// Number of favorites pages for `count` favorites (at least 1).
pub fn favorites_page_count(count: usize) -> usize {
    count.div_ceil(FAVORITES_PER_PAGE).max(1)
}

/// Clamp a 1-based favorites page into `[1, favorites_page_count(count)]`.
pub fn clamp_favorites_page(page: usize, count: usize) -> usize {
    page.clamp(1, favorites_page_count(count))
}

/// Request to resolve a favorites list, tagged so late answers can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesTicket {
    pub generation: u64,
    pub ids: Vec<String>,
}

/// Favorite dog records, kept in favorites order.
#[derive(Debug, Default)]
pub struct FavoriteDogs {
    /// Id list the current records (or the pending request) belong to
    key: Vec<String>,
    generation: u64,
    dogs: Vec<Dog>,
    loading: bool,
}

impl FavoriteDogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for the records of `ids`.
    ///
    /// Returns a ticket when a fetch is needed. An unchanged list needs
    /// nothing; an empty list clears the records without a request.
    pub fn request(&mut self, ids: &[String]) -> Option<FavoritesTicket> {
        if self.key.as_slice() == ids {
            return None;
        }

        self.generation += 1;
        self.key = ids.to_vec();
        // Records for ids that are still favorites stay visible meanwhile.
        self.dogs.retain(|dog| ids.contains(&dog.id));

        if ids.is_empty() {
            self.loading = false;
            return None;
        }

        self.loading = true;
        Some(FavoritesTicket {
            generation: self.generation,
            ids: self.key.clone(),
        })
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale.
    pub fn complete(&mut self, generation: u64, result: Result<Vec<Dog>, ApiError>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Dropping stale favorites response (generation {} < {})",
                generation,
                self.generation
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(dogs) => self.dogs = arrange_by_ids(dogs, &self.key),
            Err(err) => {
                tracing::warn!("Failed to resolve favorites: {}", err);
                // Forget the key so the next request fetches again.
                self.key.clear();
            }
        }
        true
    }

    /// Whether `generation` is the latest request issued.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Generation of the latest request issued.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Records on 1-based favorites `page`.
    pub fn page(&self, page: usize) -> &[Dog] {
        let start = page.saturating_sub(1) * FAVORITES_PER_PAGE;
        if start >= self.dogs.len() {
            return &[];
        }
        let end = (start + FAVORITES_PER_PAGE).min(self.dogs.len());
        &self.dogs[start..end]
    }

    /// Forget everything, invalidating any request in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.key.clear();
        self.dogs.clear();
        self.loading = false;
    }
}
