//! Network actions for the App.
//!
//! Each action spawns a task holding a clone of the shared client and the
//! message sender. Results come back as [`AppMessage`]s; nothing here
//! touches UI state after the task is spawned.

use std::sync::Arc;

use tracing::{debug, info};

use crate::favorites::FavoritesTicket;
use crate::matching::find_match;
use crate::models::AuthUser;
use crate::search::{run_search, SearchTicket};

use super::{App, AppMessage};

impl App {
    /// Check whether a stored session is still accepted by the server.
    ///
    /// The breed list doubles as the check; it is kept on success.
    pub(crate) fn check_session(&mut self) {
        let had_cookie = self.client.has_session();
        debug!("Probing session (cookie present: {})", had_cookie);
        self.breeds_loading = true;

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.breeds().await;
            let _ = tx.send(AppMessage::SessionChecked { result, had_cookie });
        });
    }

    /// Load the breed list unless it is loaded or loading already.
    pub(crate) fn load_breeds(&mut self) {
        if self.breeds_loading || !self.breeds.is_empty() {
            return;
        }
        self.breeds_loading = true;

        let epoch = self.session_epoch;
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.breeds().await;
            let _ = tx.send(AppMessage::BreedsLoaded { epoch, result });
        });
    }

    pub(crate) fn spawn_search(&self, ticket: SearchTicket) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = run_search(&client, &ticket.params).await;
            let _ = tx.send(AppMessage::SearchFinished {
                generation: ticket.generation,
                result,
            });
        });
    }

    pub(crate) fn spawn_favorites(&self, ticket: FavoritesTicket) {
        debug!(
            "Resolving {} favorites (generation {})",
            ticket.ids.len(),
            ticket.generation
        );
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.dogs_by_ids(&ticket.ids).await;
            let _ = tx.send(AppMessage::FavoriteDogsLoaded {
                generation: ticket.generation,
                result,
            });
        });
    }

    /// Submit the credentials form. Ignored while a submit is in flight.
    pub fn submit_login(&mut self) {
        if self.login_form.submitting {
            return;
        }
        if let Err(message) = self.login_form.validate() {
            self.login_form.error = Some(message.to_string());
            return;
        }

        let mode = self.auth_mode();
        let user = AuthUser::new(
            self.login_form.name.trim(),
            self.login_form.email.trim(),
        );
        self.login_form.submitting = true;
        self.login_form.error = None;
        info!("Submitting {:?} for {}", mode, user.email);

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.login(&user.name, &user.email).await;
            let _ = tx.send(AppMessage::LoginFinished { mode, user, result });
        });
    }

    /// Log out. Ignored while a logout is in flight.
    pub fn logout(&mut self) {
        if self.logging_out {
            return;
        }
        self.logging_out = true;
        info!("Logging out");

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.logout().await;
            let _ = tx.send(AppMessage::LogoutFinished { result });
        });
    }

    /// Ask the server to pick a match among the favorites.
    ///
    /// Ignored with no favorites or while a match is in flight.
    pub fn find_match(&mut self) {
        let Some(ids) = self.match_flow.start(self.favorites.ids()) else {
            debug!("Match ignored (no favorites or already running)");
            return;
        };
        info!("Finding a match among {} favorites", ids.len());

        let epoch = self.session_epoch;
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = find_match(&client, &ids).await;
            let _ = tx.send(AppMessage::MatchFinished { epoch, result });
        });
    }
}
