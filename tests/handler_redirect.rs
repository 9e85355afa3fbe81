mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use serde_json::Value;
use shorturls::routes::normalize;
use sqlx::SqlitePool;
use tower::ServiceExt;

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_active_short_url(&pool, "redirect1", "https://example.com/target").await;
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_is_case_sensitive(pool: SqlitePool) {
    common::create_active_short_url(&pool, "CaseCode", "https://example.com").await;
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    server.get("/casecode").await.assert_status_not_found();
    assert_eq!(server.get("/CaseCode").await.status_code(), 302);
}

#[sqlx::test]
async fn test_redirect_expired(pool: SqlitePool) {
    let id = common::create_expired_short_url(&pool, "expired1", "https://example.com").await;
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/expired1").await;

    assert_eq!(response.status_code(), 410);
    assert_eq!(response.json::<Value>()["error"]["code"], "expired");
    assert_eq!(common::count_clicks(&pool, id).await, 0);

    // Expired records are kept.
    assert_eq!(server.get("/expired1").await.status_code(), 410);
}

#[sqlx::test]
async fn test_redirect_records_click_with_referrer(pool: SqlitePool) {
    common::create_active_short_url(&pool, "track", "https://example.com").await;
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/track")
        .add_header("Referer", "https://google.com")
        .await;
    assert_eq!(response.status_code(), 302);

    let stats = server.get("/shorturls/track").await.json::<Value>();
    assert_eq!(stats["totalClicks"], 1);
    assert_eq!(stats["clicks"][0]["referrer"], "https://google.com");
    assert_eq!(stats["clicks"][0]["geo"], "");
}

#[sqlx::test]
async fn test_each_redirect_appends_a_click(pool: SqlitePool) {
    let id = common::create_active_short_url(&pool, "twice", "https://example.com").await;
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    server.get("/twice").await;
    server.get("/twice").await;

    assert_eq!(common::count_clicks(&pool, id).await, 2);
}

#[sqlx::test]
async fn test_health_route_not_captured_as_shortcode(pool: SqlitePool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    server.get("/_health").await.assert_status_ok();
}

#[sqlx::test]
async fn test_redirect_outcomes_reported(pool: SqlitePool) {
    common::create_active_short_url(&pool, "logme", "https://example.com").await;
    common::create_expired_short_url(&pool, "oldone", "https://example.com").await;
    let (state, mut rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    server.get("/logme").await;
    server.get("/oldone").await;
    server.get("/missing").await;

    let events = common::drain_events(&mut rx);
    let outcomes: Vec<(&str, &str)> = events
        .iter()
        .filter(|e| e.stack == "GET /:shortcode")
        .map(|e| (e.level.as_str(), e.message.as_str()))
        .collect();

    assert_eq!(
        outcomes,
        vec![
            ("INFO", "Redirected: logme"),
            ("WARN", "Shortcode expired"),
            ("WARN", "Shortcode not found"),
        ]
    );
}

#[sqlx::test]
async fn test_trailing_slash_redirects(pool: SqlitePool) {
    let id = common::create_active_short_url(&pool, "abc123", "https://example.com/slash").await;
    let (state, _rx) = common::create_test_state(pool.clone());
    let app = normalize(common::test_app(state));

    let response = app
        .clone()
        .oneshot(Request::get("/abc123/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/slash"
    );
    assert_eq!(common::count_clicks(&pool, id).await, 1);

    let stats = app
        .oneshot(Request::get("/shorturls/abc123/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(stats.status(), StatusCode::OK);
}

#[sqlx::test]
async fn test_unsendable_stored_url_records_no_click(pool: SqlitePool) {
    let id = common::create_active_short_url(&pool, "ctrl1", "https://example.com/a\nb").await;
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/ctrl1").await;

    response.assert_status_internal_server_error();
    assert_eq!(common::count_clicks(&pool, id).await, 0);
}
