//! Route changes and everything that follows from them.
//!
//! The route is the single source of the results page and the favorites
//! page. Entering a search route syncs the search, the breed list and the
//! favorites panel to it; leaving the signed-in area resets them.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::favorites::{clamp_favorites_page, favorites_page_count, FavoriteChange};
use crate::notifications::favorite_message;
use crate::route::Route;
use crate::search::{SearchStatus, SearchTicket};
use crate::traits::KeyValueStore;

use super::App;

/// Storage key holding the last search route.
pub const ROUTE_KEY: &str = "route";

/// Last search route left in storage, if any.
pub(super) fn restore_route(storage: &dyn KeyValueStore) -> Option<Route> {
    match storage.get(ROUTE_KEY) {
        Ok(Some(path)) => {
            let route = Route::parse(&path);
            debug!("Restored route {}", route);
            Some(route)
        }
        Ok(None) => None,
        Err(err) => {
            warn!("Could not read saved route: {}", err);
            None
        }
    }
}

impl App {
    /// Go to `route`, applying the session gate.
    ///
    /// Signed-out visits to the search route land on login; a signed-in
    /// visit to login is forwarded to the first search page. While the
    /// startup check runs the route is only recorded.
    pub fn navigate(&mut self, route: Route) {
        let target = self.gate(route);
        if target != route {
            debug!("Redirecting {} to {}", route, target);
        }
        let previous = self.route;
        self.route = target;
        if previous != target {
            info!("Navigated to {}", target);
        }

        if self.session.is_loading() {
            return;
        }

        match target {
            Route::Login { .. } | Route::Signup => {
                if !matches!(
                    (previous, target),
                    (Route::Login { .. }, Route::Login { .. }) | (Route::Signup, Route::Signup)
                ) {
                    self.login_form.reset();
                }
            }
            Route::Search { .. } => self.enter_search(),
        }
        self.mark_dirty();
    }

    fn gate(&self, route: Route) -> Route {
        if self.session.is_loading() {
            return route;
        }
        match route {
            Route::Search { .. } if !self.session.is_authenticated() => Route::login(),
            Route::Login { .. } if self.session.is_authenticated() => Route::search(1),
            _ => route,
        }
    }

    /// Sync everything on the search screen to the current route.
    fn enter_search(&mut self) {
        let Route::Search { page, .. } = self.route else {
            return;
        };
        self.load_breeds();

        let ticket = match self.search.set_page(page) {
            Some(ticket) => Some(ticket),
            None if *self.search.status() == SearchStatus::Idle => Some(self.search.begin()),
            None => None,
        };
        if let Some(ticket) = ticket {
            self.selected_dog = 0;
            self.spawn_search(ticket);
        }
        self.sync_page_indicator();

        self.refresh_favorites();
        self.sync_favorites_page();
        self.persist_route();
    }

    /// Move the results to `page`.
    pub fn go_to_page(&mut self, page: usize) {
        if let Route::Search { favorites_page, .. } = self.route {
            self.navigate(Route::Search {
                page,
                favorites_page,
            });
        }
    }

    /// Move the favorites panel to `favorites_page`.
    pub fn go_to_favorites_page(&mut self, favorites_page: usize) {
        if let Route::Search { page, .. } = self.route {
            self.selected_favorite = 0;
            self.navigate(Route::Search {
                page,
                favorites_page,
            });
        }
    }

    /// Run a search issued by a filter or sort change.
    ///
    /// Those changes reset the page, so the route follows the query.
    pub(crate) fn apply_search_ticket(&mut self, ticket: Option<SearchTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        self.selected_dog = 0;
        self.spawn_search(ticket);
        self.sync_route_page();
        self.mark_dirty();
    }

    /// Copy the query's page into the route.
    pub(crate) fn sync_route_page(&mut self) {
        if let Route::Search {
            page,
            favorites_page,
        } = self.route
        {
            let query_page = self.search.query().page();
            if query_page != page {
                self.route = Route::Search {
                    page: query_page,
                    favorites_page,
                };
                self.persist_route();
            }
        }
        self.sync_page_indicator();
    }

    pub(crate) fn sync_page_indicator(&mut self) {
        self.page_indicator
            .sync(self.search.query().page(), self.search.page_count());
    }

    /// Clamp the favorites page to the favorites count and sync its indicator.
    pub(crate) fn sync_favorites_page(&mut self) {
        if let Route::Search {
            page,
            favorites_page,
        } = self.route
        {
            let clamped = clamp_favorites_page(favorites_page, self.favorites.len());
            if clamped != favorites_page {
                debug!("Favorites page clamped to {}", clamped);
                self.route = Route::Search {
                    page,
                    favorites_page: clamped,
                };
                self.persist_route();
            }
        }
        self.favorites_indicator.sync(
            self.favorites_page(),
            favorites_page_count(self.favorites.len()),
        );
        self.clamp_selection();
    }

    /// Re-resolve favorite records if the id list changed.
    pub(crate) fn refresh_favorites(&mut self) {
        if let Some(ticket) = self.favorite_dogs.request(self.favorites.ids()) {
            self.spawn_favorites(ticket);
        }
    }

    /// Add or remove `id` from the favorites.
    pub fn toggle_favorite(&mut self, id: &str) {
        let change = self.favorites.toggle(id);
        debug!("Favorite {} {:?}", id, change);
        self.snackbar.show(favorite_message(change), Instant::now());
        self.refresh_favorites();
        self.sync_favorites_page();
        self.mark_dirty();
    }

    /// Remove `id` from the favorites, if present.
    pub fn remove_favorite(&mut self, id: &str) {
        if !self.favorites.remove(id) {
            return;
        }
        debug!("Favorite {} removed", id);
        self.snackbar
            .show(favorite_message(FavoriteChange::Removed), Instant::now());
        self.refresh_favorites();
        self.sync_favorites_page();
        self.mark_dirty();
    }

    /// The server rejected the session: drop signed-in state and show login
    /// with the expired notice.
    pub(crate) fn expire_session(&mut self) {
        warn!("Session expired; returning to login");
        self.client.clear_session();
        self.session.clear();
        self.reset_signed_in_state();
        self.navigate(Route::session_expired());
    }

    /// Forget everything that belongs to the signed-in user.
    ///
    /// Favorites stay; logout clears them separately.
    pub(crate) fn reset_signed_in_state(&mut self) {
        self.session_epoch += 1;
        self.search.reset(1);
        self.favorite_dogs.reset();
        self.match_flow.abandon();
        self.breeds.clear();
        self.breeds_loading = false;
        self.breed_picker.close();
        self.page_indicator = Default::default();
        self.favorites_indicator = Default::default();
        self.selected_dog = 0;
        self.selected_favorite = 0;
        self.focus = Default::default();
    }

    fn persist_route(&self) {
        if !matches!(self.route, Route::Search { .. }) {
            return;
        }
        if let Err(err) = self.storage.set(ROUTE_KEY, &self.route.to_path()) {
            warn!("Could not save route: {}", err);
        }
    }

    pub(crate) fn forget_route(&self) {
        if let Err(err) = self.storage.remove(ROUTE_KEY) {
            warn!("Could not remove saved route: {}", err);
        }
    }
}
