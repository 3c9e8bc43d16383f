use serde::{Deserialize, Serialize};

/// The signed-in user. Held in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
}

impl AuthUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Placeholder user synthesized when a stored session cookie is still valid.
    ///
    /// The API has no "who am I" endpoint, so the real name is unknown.
    pub fn from_session() -> Self {
        Self::new("Session", "session@fetch.com")
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
}
