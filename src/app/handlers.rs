//! Message handling for the App.

use tracing::{debug, info, warn};

use crate::route::Route;
use crate::search::SearchOutcome;

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::SessionChecked { result, had_cookie } => {
                self.breeds_loading = false;
                match result {
                    Ok(breeds) => {
                        self.session.resolve(true);
                        self.breeds = breeds;
                        let route = self.route;
                        self.navigate(route);
                    }
                    Err(err) => {
                        self.session.resolve(false);
                        debug!("Session check failed [{}]: {}", err.error_code(), err);
                        // Only a rejected stored cookie counts as an expiry
                        if err.is_session_expired() && had_cookie {
                            self.navigate(Route::session_expired());
                        } else {
                            self.navigate(Route::login());
                        }
                    }
                }
            }
            AppMessage::BreedsLoaded { epoch, result } => {
                if epoch != self.session_epoch {
                    debug!("Dropping breed list from an earlier session");
                    return;
                }
                self.breeds_loading = false;
                match result {
                    Ok(breeds) => {
                        debug!("Loaded {} breeds", breeds.len());
                        self.breeds = breeds;
                    }
                    Err(err) if err.is_session_expired() => self.expire_session(),
                    Err(err) => warn!("Failed to load breeds [{}]: {}", err.error_code(), err),
                }
            }
            AppMessage::SearchFinished { generation, result } => {
                let current = generation == self.search.generation();
                if current && result.as_ref().is_err_and(|err| err.is_session_expired()) {
                    self.expire_session();
                    return;
                }
                match self.search.complete(generation, result) {
                    SearchOutcome::Stale => {}
                    SearchOutcome::Applied => {
                        self.sync_page_indicator();
                        self.clamp_selection();
                    }
                    SearchOutcome::Reclamped(ticket) => {
                        self.spawn_search(ticket);
                        self.sync_route_page();
                        self.clamp_selection();
                    }
                }
            }
            AppMessage::FavoriteDogsLoaded { generation, result } => {
                if !self.favorite_dogs.is_current(generation) {
                    debug!("Dropping stale favorites response (generation {})", generation);
                    return;
                }
                if result.as_ref().is_err_and(|err| err.is_session_expired()) {
                    self.expire_session();
                    return;
                }
                if self.favorite_dogs.complete(generation, result) {
                    self.clamp_selection();
                }
            }
            AppMessage::LoginFinished { mode, user, result } => {
                self.login_form.submitting = false;
                match result {
                    Ok(()) => {
                        info!("{:?} succeeded for {}", mode, user.email);
                        self.session.set_user(user);
                        self.login_form.reset();
                        self.navigate(Route::search(1));
                    }
                    Err(err) => {
                        warn!("{:?} failed [{}]: {}", mode, err.error_code(), err);
                        self.login_form.error = Some(mode.failure_message().to_string());
                    }
                }
            }
            AppMessage::LogoutFinished { result } => {
                self.logging_out = false;
                if let Err(err) = result {
                    warn!("Logout request failed [{}]: {}", err.error_code(), err);
                }
                self.session.clear();
                self.favorites.clear();
                self.reset_signed_in_state();
                self.forget_route();
                info!("Logged out");
                self.navigate(Route::login());
            }
            AppMessage::MatchFinished { epoch, result } => {
                if epoch != self.session_epoch || !self.match_flow.is_in_flight() {
                    debug!("Dropping match result from an earlier session");
                    return;
                }
                match result {
                    Err(err) if err.is_session_expired() => {
                        self.match_flow.abandon();
                        self.expire_session();
                    }
                    result => {
                        self.match_flow.finish(result);
                    }
                }
            }
        }
    }
}
