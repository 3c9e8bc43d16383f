//! Transient snackbar messages.
//!
//! One message is visible at a time. Each new message replaces the previous
//! one and restarts the hide timer, even when the text is identical.

use std::time::{Duration, Instant};

use crate::favorites::FavoriteChange;

/// How long a snackbar stays visible.
pub const SNACKBAR_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
struct SnackbarMessage {
    text: String,
    /// Bumped on every `show`
    key: u64,
    shown_at: Instant,
}

#[derive(Debug, Default)]
pub struct Snackbar {
    current: Option<SnackbarMessage>,
    next_key: u64,
}

impl Snackbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` starting at `now`.
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        self.next_key += 1;
        self.current = Some(SnackbarMessage {
            text: text.into(),
            key: self.next_key,
            shown_at: now,
        });
    }

    /// Hide the message once its time is up. Returns `true` if it was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|msg| now.duration_since(msg.shown_at) >= SNACKBAR_DURATION);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|msg| msg.text.as_str())
    }

    /// Identity of the visible message.
    pub fn key(&self) -> Option<u64> {
        self.current.as_ref().map(|msg| msg.key)
    }
}

/// Snackbar text for a favorites change.
pub fn favorite_message(change: FavoriteChange) -> &'static str {
    match change {
        FavoriteChange::Added => "1 favorite added!",
        FavoriteChange::Removed => "1 favorite removed!",
    }
}
