//! Screen routes and their path form.
//!
//! | Path | Route |
//! |------|-------|
//! | `/login`, `/login?session=expired` | [`Route::Login`] |
//! | `/signup` | [`Route::Signup`] |
//! | `/search`, `/search/:page`, `...?favoritesPage=n` | [`Route::Search`] |
//!
//! Anything else resolves to `/login`.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login { session_expired: bool },
    Signup,
    Search { page: usize, favorites_page: usize },
}

impl Default for Route {
    fn default() -> Self {
        Route::login()
    }
}

impl Route {
    pub fn login() -> Self {
        Route::Login {
            session_expired: false,
        }
    }

    pub fn session_expired() -> Self {
        Route::Login {
            session_expired: true,
        }
    }

    pub fn search(page: usize) -> Self {
        Route::Search {
            page: page.max(1),
            favorites_page: 1,
        }
    }

    /// Login and signup are reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login { .. } | Route::Signup)
    }

    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = input.split_once('?').unwrap_or((input, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["login"] => Route::Login {
                session_expired: query_param(query, "session") == Some("expired"),
            },
            ["signup"] => Route::Signup,
            ["search"] => Route::Search {
                page: 1,
                favorites_page: positive_param(query, "favoritesPage"),
            },
            ["search", page] => Route::Search {
                page: positive_number(page),
                favorites_page: positive_param(query, "favoritesPage"),
            },
            _ => Route::login(),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Login {
                session_expired: true,
            } => "/login?session=expired".to_string(),
            Route::Login { .. } => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Search {
                page,
                favorites_page,
            } => {
                if *favorites_page > 1 {
                    format!("/search/{}?favoritesPage={}", page, favorites_page)
                } else {
                    format!("/search/{}", page)
                }
            }
        }
    }
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

fn positive_param(query: &str, key: &str) -> usize {
    query_param(query, key).map(positive_number).unwrap_or(1)
}

/// Parse a 1-based number; anything non-numeric or below 1 becomes 1.
fn positive_number(raw: &str) -> usize {
    raw.parse::<usize>().ok().filter(|n| *n >= 1).unwrap_or(1)
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::parse(s))
    }
}
