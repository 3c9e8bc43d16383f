//! Who is signed in.
//!
//! The server never says who owns a session cookie, so a session restored
//! from disk is represented by [`AuthUser::from_session`].

use crate::models::AuthUser;
use crate::route::Route;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The startup check has not answered yet
    #[default]
    Loading,
    Authenticated(AuthUser),
    Unauthenticated,
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    /// Whether startup on `route` should check the stored session.
    ///
    /// Login and signup never check; they settle as unauthenticated at once.
    pub fn needs_check(&mut self, route: &Route) -> bool {
        if !self.is_loading() {
            return false;
        }
        if route.is_public() {
            self.state = SessionState::Unauthenticated;
            return false;
        }
        true
    }

    /// Settle the startup check.
    pub fn resolve(&mut self, valid: bool) {
        self.state = if valid {
            SessionState::Authenticated(AuthUser::from_session())
        } else {
            SessionState::Unauthenticated
        };
        tracing::debug!("Session check resolved: authenticated={}", valid);
    }

    pub fn set_user(&mut self, user: AuthUser) {
        tracing::info!("Signed in as {}", user.email);
        self.state = SessionState::Authenticated(user);
    }

    pub fn clear(&mut self) {
        self.state = SessionState::Unauthenticated;
    }
}
