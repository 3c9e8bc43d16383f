//! Common test utilities for integration tests.
//!
//! Fixtures for dogs and API payloads, plus builders that wire a
//! [`FetchClient`] to a wiremock server through the real reqwest adapter.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use fetch_dogs::adapters::{InMemoryStorage, ReqwestHttpClient};
use fetch_dogs::api::FetchClient;
use fetch_dogs::app::{App, AppMessage};
use fetch_dogs::route::Route;
use fetch_dogs::traits::KeyValueStore;
use serde_json::{json, Value};

/// Cookie the mock server hands out on login.
pub const SESSION_COOKIE: &str = "fetch-access-token=test-token";

/// JSON for one dog.
pub fn dog_json(id: &str) -> Value {
    json!({
        "id": id,
        "img": format!("https://img.test/{}.jpg", id),
        "name": format!("Dog {}", id),
        "age": 3,
        "zip_code": "10001",
        "breed": "Beagle"
    })
}

/// Ids `dog-<start>` through `dog-<end - 1>`.
pub fn dog_ids(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|n| format!("dog-{}", n)).collect()
}

/// A client talking to `base_url` over reqwest, sharing `storage`.
pub fn api_client(base_url: &str, storage: Arc<dyn KeyValueStore>) -> Arc<FetchClient> {
    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(5)).unwrap();
    Arc::new(FetchClient::new(base_url, Arc::new(http), storage))
}

/// Storage already holding a session cookie.
pub fn signed_in_storage() -> InMemoryStorage {
    let storage = InMemoryStorage::new();
    storage.set("session", SESSION_COOKIE).unwrap();
    storage
}

/// App against `base_url`, started at `route` (or the saved one).
pub fn start_app(base_url: &str, storage: &InMemoryStorage, route: Option<Route>) -> App {
    let shared: Arc<dyn KeyValueStore> = Arc::new(storage.clone());
    let client = api_client(base_url, Arc::clone(&shared));
    let mut app = App::new(client, shared, route);
    app.start();
    app
}

/// Apply async results until `done` holds.
///
/// Panics when nothing satisfying `done` arrives within five seconds.
pub async fn pump_until(app: &mut App, done: impl Fn(&App) -> bool) {
    let mut rx = app.message_rx.take().expect("message receiver already taken");
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);

    while !done(app) {
        let msg: AppMessage = tokio::time::timeout_at(deadline, rx.recv())
            .await
            .expect("timed out waiting for app messages")
            .expect("message channel closed");
        app.handle_message(msg);
    }

    app.message_rx = Some(rx);
}
