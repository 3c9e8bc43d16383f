//! Session-aware wrapper around the HTTP transport.
//!
//! Every request is sent against one base URL and carries the cookies held
//! in a [`reqwest::cookie::Jar`], filled from earlier `Set-Cookie` headers.
//! A 401 or 403 answer drops the cookies and comes back as
//! [`ApiError::SessionExpired`]; this layer never decides what the UI does
//! about it.

use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{ApiError, ApiResult};
use crate::traits::{Headers, HttpClient, KeyValueStore, Response};

/// Production API endpoint.
pub const DEFAULT_API_URL: &str = "https://frontend-take-home-service.fetch.com";

/// Storage key holding the persisted `Cookie` header value.
pub const SESSION_KEY: &str = "session";

/// Longest error body kept in [`ApiError::Status`] messages.
const MAX_ERROR_BODY: usize = 200;

/// Client for the dog adoption API.
pub struct FetchClient {
    base_url: String,
    /// API root that captured cookies are scoped to
    cookie_url: Option<Url>,
    http: Arc<dyn HttpClient>,
    storage: Arc<dyn KeyValueStore>,
    /// Replaced wholesale when the session is cleared
    cookies: RwLock<Jar>,
}

impl FetchClient {
    /// Create a client, restoring any session cookie left in `storage`.
    pub fn new(
        base_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let cookie_url = match Url::parse(&format!("{}/", base_url)) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!("Cookies disabled, bad API URL {}: {}", base_url, err);
                None
            }
        };

        let jar = Jar::default();
        match (storage.get(SESSION_KEY), &cookie_url) {
            (Ok(Some(saved)), Some(url)) => restore_cookies(&jar, &saved, url),
            (Ok(_), _) => {}
            (Err(err), _) => tracing::warn!("Could not read saved session: {}", err),
        }

        Self {
            base_url,
            cookie_url,
            http,
            storage,
            cookies: RwLock::new(jar),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a session cookie is currently held.
    pub fn has_session(&self) -> bool {
        self.session_cookies().is_some()
    }

    /// Forget the session cookie in memory and in storage.
    pub fn clear_session(&self) {
        *self.cookies.write().unwrap_or_else(PoisonError::into_inner) = Jar::default();
        if let Err(err) = self.storage.remove(SESSION_KEY) {
            tracing::warn!("Could not remove saved session: {}", err);
        }
    }

    /// `GET path?query` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.url(path, query);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url, &self.request_headers(&url, false)).await?;
        let response = self.check(response)?;
        decode(&response)
    }

    /// `POST path` with a JSON body and decode the JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.post(path, Some(body)).await?;
        decode(&response)
    }

    /// `POST path` with a JSON body, ignoring the response body.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.post(path, Some(body)).await.map(|_| ())
    }

    /// `POST path` with no body.
    pub async fn post_empty(&self, path: &str) -> ApiResult<()> {
        self.post::<()>(path, None).await.map(|_| ())
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> ApiResult<Response> {
        let url = self.url(path, &[]);
        let headers = self.request_headers(&url, body.is_some());
        let body = match body {
            Some(body) => {
                serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?
            }
            None => String::new(),
        };
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(&url, &body, &headers)
            .await?;
        self.check(response)
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    fn request_headers(&self, url: &str, json_body: bool) -> Headers {
        let mut headers = Headers::new();
        if json_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(cookie) = Url::parse(url).ok().and_then(|url| self.cookies_for(&url)) {
            headers.insert("Cookie".to_string(), cookie);
        }
        headers
    }

    /// `Cookie` header value the jar holds for `url`.
    fn cookies_for(&self, url: &Url) -> Option<String> {
        let jar = self.cookies.read().unwrap_or_else(PoisonError::into_inner);
        jar.cookies(url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Cookies sent to the API root; this is what gets persisted.
    fn session_cookies(&self) -> Option<String> {
        self.cookie_url.as_ref().and_then(|url| self.cookies_for(url))
    }

    /// Capture cookies, then classify non-2xx responses.
    fn check(&self, response: Response) -> ApiResult<Response> {
        self.capture_cookies(&response);

        if response.is_success() {
            return Ok(response);
        }

        let err = ApiError::from_status(response.status, error_body(&response));
        if err.is_session_expired() {
            tracing::info!("Session rejected with HTTP {}", response.status);
            self.clear_session();
        } else {
            tracing::warn!("Request failed: {}", err);
        }
        Err(err)
    }

    /// Store `Set-Cookie` values, scoped to the API root, and persist what
    /// the jar now holds. Expired cookies drop out of the jar.
    fn capture_cookies(&self, response: &Response) {
        let set_cookies = response.set_cookies();
        let Some(url) = self.cookie_url.as_ref() else {
            return;
        };
        if set_cookies.is_empty() {
            return;
        }

        {
            let jar = self.cookies.read().unwrap_or_else(PoisonError::into_inner);
            for raw in set_cookies {
                jar.add_cookie_str(raw, url);
            }
        }

        let saved = match self.session_cookies() {
            Some(header) => self.storage.set(SESSION_KEY, &header),
            None => self.storage.remove(SESSION_KEY),
        };
        if let Err(err) = saved {
            tracing::warn!("Could not persist session: {}", err);
        }
    }
}

fn decode<T: DeserializeOwned>(response: &Response) -> ApiResult<T> {
    response
        .json()
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn error_body(response: &Response) -> String {
    let text = String::from_utf8_lossy(&response.body);
    text.chars().take(MAX_ERROR_BODY).collect()
}

/// Put a persisted `Cookie` header value back into `jar`.
fn restore_cookies(jar: &Jar, saved: &str, url: &Url) {
    for pair in saved.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
        jar.add_cookie_str(&format!("{}; Path=/", pair), url);
    }
}
