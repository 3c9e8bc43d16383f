//! Mock HTTP client for testing.
//!
//! Responses are registered per method and URL prefix. Several responses
//! for the same route are served in order; the last one keeps repeating.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL including the query string
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

impl MockResponse {
    /// A response with a JSON body.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(value.to_string())))
    }

    /// A response with a plain text body.
    pub fn text(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }

    /// An empty-bodied response with the given status.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, Bytes::new()))
    }

    /// A `200 OK` carrying a `Set-Cookie` header.
    pub fn with_cookie(cookie: &str) -> Self {
        let mut headers = Headers::new();
        headers.insert("set-cookie".to_string(), cookie.to_string());
        MockResponse::Success(Response::with_headers(200, headers, Bytes::from("OK")))
    }
}

type RouteKey = (String, String);

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use fetch_dogs::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.on_get("http://api/dogs/breeds", MockResponse::json(200, json!(["Pug"])));
/// let response = client.get("http://api/dogs/breeds", &Headers::new()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Queued responses by (method, URL prefix)
    responses: Arc<Mutex<HashMap<RouteKey, VecDeque<MockResponse>>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for GET requests whose URL starts with `url`.
    pub fn on_get(&self, url: &str, response: MockResponse) {
        self.push_response("GET", url, response);
    }

    /// Queue a response for POST requests whose URL starts with `url`.
    pub fn on_post(&self, url: &str, response: MockResponse) {
        self.push_response("POST", url, response);
    }

    fn push_response(&self, method: &str, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((method.to_string(), url.to_string()))
            .or_default()
            .push_back(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                method: method.to_string(),
                url: url.to_string(),
                headers: headers.clone(),
                body,
            });
    }

    /// Pick the queued response with the longest matching prefix.
    fn next_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        let mut responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        let key = responses
            .keys()
            .filter(|(m, prefix)| m == method && url.starts_with(prefix.as_str()))
            .max_by_key(|(_, prefix)| prefix.len())
            .cloned()?;
        let queue = responses.get_mut(&key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }

    fn respond(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        match self.next_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond("GET", url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond("POST", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_records_request() {
        let client = MockHttpClient::new();
        client.on_get("http://api/dogs/breeds", MockResponse::json(200, json!(["Pug"])));

        let response = client
            .get("http://api/dogs/breeds", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "http://api/dogs/breeds");
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.on_post("http://api/dogs", MockResponse::json(200, json!([])));
        client.on_post("http://api/dogs/match", MockResponse::json(200, json!({"match": "a"})));

        let response = client
            .post("http://api/dogs/match", "[]", &Headers::new())
            .await
            .unwrap();
        let body: serde_json::Value = response.json().unwrap();
        assert_eq!(body["match"], "a");
    }

    #[tokio::test]
    async fn test_queue_then_sticky_last() {
        let client = MockHttpClient::new();
        client.on_get("http://api/x", MockResponse::status(500));
        client.on_get("http://api/x", MockResponse::status(200));

        let first = client.get("http://api/x", &Headers::new()).await.unwrap();
        let second = client.get("http://api/x", &Headers::new()).await.unwrap();
        let third = client.get("http://api/x", &Headers::new()).await.unwrap();
        assert_eq!(first.status, 500);
        assert_eq!(second.status, 200);
        assert_eq!(third.status, 200);
    }

    #[tokio::test]
    async fn test_method_is_part_of_route() {
        let client = MockHttpClient::new();
        client.on_get("http://api/dogs", MockResponse::status(200));

        let result = client.post("http://api/dogs", "[]", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.on_get(
            "http://api/down",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
        let result = client.get("http://api/down", &Headers::new()).await;
        assert_eq!(
            result.unwrap_err(),
            HttpError::ConnectionFailed("refused".to_string())
        );
    }
}
