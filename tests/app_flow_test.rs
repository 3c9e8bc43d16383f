//! End-to-end flows: the App driven by real async results from a
//! wiremock-backed API.

mod common;

use common::{dog_ids, dog_json, pump_until, signed_in_storage, start_app, SESSION_COOKIE};
use fetch_dogs::adapters::InMemoryStorage;
use fetch_dogs::app::{Screen, ROUTE_KEY};
use fetch_dogs::matching::MatchResult;
use fetch_dogs::route::Route;
use fetch_dogs::search::SearchStatus;
use fetch_dogs::traits::KeyValueStore;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Breeds, plus every POST /dogs answered with records for the ids sent.
async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/dogs/breeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Beagle", "Pug"])))
        .mount(server)
        .await;
}

/// `GET /dogs/search` with `from` answered by a page of a 30-dog catalog.
async fn mount_search_page(server: &MockServer, from: usize) {
    let ids = dog_ids(from..30.min(from + 12));
    Mock::given(method("GET"))
        .and(path("/dogs/search"))
        .and(query_param("from", from.to_string()))
        .and(query_param("size", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultIds": ids,
            "total": 30
        })))
        .mount(server)
        .await;

    let dogs: Vec<_> = ids.iter().map(|id| dog_json(id)).collect();
    Mock::given(method("POST"))
        .and(path("/dogs"))
        .and(body_json(&ids))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(dogs)))
        .mount(server)
        .await;
}

fn search_settled(app: &fetch_dogs::app::App) -> bool {
    matches!(
        app.search.status(),
        SearchStatus::Ready | SearchStatus::Failed(_)
    )
}

#[tokio::test]
async fn test_restart_resumes_saved_search_page() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_search_page(&server, 24).await;

    let storage = signed_in_storage();
    storage.set(ROUTE_KEY, "/search/3").unwrap();

    let mut app = start_app(&server.uri(), &storage, None);
    assert_eq!(app.screen(), Screen::Loading);

    pump_until(&mut app, search_settled).await;

    assert_eq!(app.screen(), Screen::Search);
    assert_eq!(app.route, Route::search(3));
    assert_eq!(app.search.dogs().len(), 6);
    assert_eq!(app.search.total(), Some(30));
    assert_eq!(app.page_indicator.page(), 3);
    assert_eq!(app.page_indicator.count(), 3);
    assert_eq!(app.breeds, vec!["Beagle".to_string(), "Pug".to_string()]);
}

#[tokio::test]
async fn test_page_past_the_end_is_clamped() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    // page 9 of a 30-dog catalog is empty; the client falls back to page 3
    Mock::given(method("GET"))
        .and(path("/dogs/search"))
        .and(query_param("from", "96"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultIds": [],
            "total": 30
        })))
        .mount(&server)
        .await;
    mount_search_page(&server, 24).await;

    let storage = signed_in_storage();
    let mut app = start_app(&server.uri(), &storage, Some(Route::search(9)));

    pump_until(&mut app, |app| {
        app.route == Route::search(3) && app.search.dogs().len() == 6
    })
    .await;

    assert_eq!(storage.get(ROUTE_KEY).unwrap().as_deref(), Some("/search/3"));
}

#[tokio::test]
async fn test_rejected_cookie_shows_expired_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dogs/breeds"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let storage = signed_in_storage();
    let mut app = start_app(&server.uri(), &storage, Some(Route::search(2)));

    pump_until(&mut app, |app| app.screen() != Screen::Loading).await;

    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(app.route, Route::session_expired());
    assert_eq!(storage.get("session").unwrap(), None);
}

#[tokio::test]
async fn test_no_cookie_shows_plain_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dogs/breeds"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let storage = InMemoryStorage::new();
    let mut app = start_app(&server.uri(), &storage, None);

    pump_until(&mut app, |app| app.screen() != Screen::Loading).await;
    assert_eq!(app.route, Route::login());
}

#[tokio::test]
async fn test_login_lands_on_first_search_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"name": "Ada", "email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", SESSION_COOKIE))
        .mount(&server)
        .await;
    mount_catalog(&server).await;
    mount_search_page(&server, 0).await;

    let storage = InMemoryStorage::new();
    let mut app = start_app(&server.uri(), &storage, Some(Route::login()));
    assert_eq!(app.screen(), Screen::Login);

    app.handle_paste("  Ada ");
    app.login_form.next_field();
    app.handle_paste("ada@example.com");
    app.submit_login();
    assert!(app.login_form.submitting);

    pump_until(&mut app, |app| {
        app.screen() == Screen::Search && search_settled(app)
    })
    .await;

    assert_eq!(app.route, Route::search(1));
    assert_eq!(app.session.user().map(|u| u.name.as_str()), Some("Ada"));
    assert_eq!(app.search.dogs().len(), 12);
    assert_eq!(storage.get("session").unwrap().as_deref(), Some(SESSION_COOKIE));
    assert_eq!(storage.get(ROUTE_KEY).unwrap().as_deref(), Some("/search/1"));
}

#[tokio::test]
async fn test_failed_login_shows_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let storage = InMemoryStorage::new();
    let mut app = start_app(&server.uri(), &storage, Some(Route::login()));
    app.handle_paste("Ada");
    app.login_form.next_field();
    app.handle_paste("ada@example.com");
    app.submit_login();

    pump_until(&mut app, |app| !app.login_form.submitting).await;

    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(
        app.login_form.error.as_deref(),
        Some("Login failed. Please check your credentials and try again.")
    );
}

#[tokio::test]
async fn test_expired_session_during_search() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    Mock::given(method("GET"))
        .and(path("/dogs/search"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let storage = signed_in_storage();
    let mut app = start_app(&server.uri(), &storage, Some(Route::search(1)));

    pump_until(&mut app, |app| app.route == Route::session_expired()).await;

    assert_eq!(app.screen(), Screen::Login);
    assert!(!app.session.is_authenticated());
    assert_eq!(storage.get("session").unwrap(), None);
    assert!(app.search.dogs().is_empty());
}

#[tokio::test]
async fn test_match_opens_modal_with_dog() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_search_page(&server, 0).await;
    Mock::given(method("POST"))
        .and(path("/dogs"))
        .and(body_json(json!(["fav-1", "fav-2"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            dog_json("fav-2"),
            dog_json("fav-1")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/dogs/match"))
        .and(body_json(json!(["fav-1", "fav-2"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"match": "fav-2"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/dogs"))
        .and(body_json(json!(["fav-2"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([dog_json("fav-2")])))
        .mount(&server)
        .await;

    let storage = signed_in_storage();
    storage.set("favorites", r#"["fav-1","fav-2"]"#).unwrap();
    let mut app = start_app(&server.uri(), &storage, Some(Route::search(1)));

    pump_until(&mut app, |app| {
        search_settled(app) && app.favorite_dogs.dogs().len() == 2
    })
    .await;
    // favorites panel keeps favorites order, not response order
    assert_eq!(app.visible_favorites()[0].id, "fav-1");

    app.find_match();
    app.find_match();
    assert!(app.match_flow.is_in_flight());

    pump_until(&mut app, |app| app.match_flow.is_open()).await;

    match app.match_flow.modal() {
        Some(MatchResult::Found(dog)) => assert_eq!(dog.id, "fav-2"),
        other => panic!("expected a matched dog, got {:?}", other),
    }
}

#[tokio::test]
async fn test_logout_clears_local_state_even_on_failure() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_search_page(&server, 0).await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let storage = signed_in_storage();
    storage.set("favorites", r#"["dog-1"]"#).unwrap();
    let mut app = start_app(&server.uri(), &storage, Some(Route::search(1)));
    pump_until(&mut app, search_settled).await;

    app.logout();
    pump_until(&mut app, |app| !app.logging_out).await;

    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(app.route, Route::login());
    assert!(app.favorites.is_empty());
    assert_eq!(storage.get("favorites").unwrap(), None);
    assert_eq!(storage.get("session").unwrap(), None);
    assert_eq!(storage.get(ROUTE_KEY).unwrap(), None);
}
