#![allow(dead_code)]

use axum::Router;
use axum::extract::connect_info::MockConnectInfo;
use chrono::{DateTime, Duration, Utc};
use shorturls::application::services::LogService;
use shorturls::domain::log_event::LogEvent;
use shorturls::infrastructure::geo::NullGeoLocator;
use shorturls::routes::app_router;
use shorturls::state::{AppState, StateOptions};
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn insert_short_url(
    pool: &SqlitePool,
    shortcode: &str,
    url: &str,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO short_urls (shortcode, original_url, created_at, expires_at) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(shortcode)
    .bind(url)
    .bind(created_at)
    .bind(expires_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_active_short_url(pool: &SqlitePool, shortcode: &str, url: &str) -> i64 {
    let now = Utc::now();
    insert_short_url(pool, shortcode, url, now, now + Duration::minutes(30)).await
}

pub async fn create_expired_short_url(pool: &SqlitePool, shortcode: &str, url: &str) -> i64 {
    let created_at = Utc::now() - Duration::hours(1);
    insert_short_url(
        pool,
        shortcode,
        url,
        created_at,
        created_at + Duration::minutes(30),
    )
    .await
}

pub async fn count_clicks(pool: &SqlitePool, short_url_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE short_url_id = ?")
        .bind(short_url_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> (AppState, mpsc::Receiver<LogEvent>) {
    let (log_service, rx) = LogService::channel("url-shortener", 100);

    let state = AppState::new(
        Arc::new(pool),
        Arc::new(NullGeoLocator::new()),
        log_service,
        StateOptions::default(),
    );

    (state, rx)
}

/// Full application router with a fixed peer address.
pub fn test_app(state: AppState) -> Router {
    let peer: SocketAddr = "127.0.0.1:12345".parse().unwrap();
    app_router(state).layer(MockConnectInfo(peer))
}

/// Drains every queued log event.
pub fn drain_events(rx: &mut mpsc::Receiver<LogEvent>) -> Vec<LogEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
