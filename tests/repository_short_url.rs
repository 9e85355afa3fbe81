mod common;

use chrono::{Duration, Utc};
use shorturls::domain::entities::{NewClick, NewShortUrl};
use shorturls::domain::repositories::{ClickRepository, ShortUrlRepository};
use shorturls::error::AppError;
use shorturls::infrastructure::persistence::{SqliteClickRepository, SqliteShortUrlRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

fn new_short_url(shortcode: &str) -> NewShortUrl {
    let now = Utc::now();
    NewShortUrl {
        shortcode: shortcode.to_string(),
        original_url: "https://example.com".to_string(),
        created_at: now,
        expires_at: now + Duration::minutes(30),
    }
}

#[sqlx::test]
async fn test_create_short_url(pool: SqlitePool) {
    let repo = SqliteShortUrlRepository::new(Arc::new(pool));

    let new = new_short_url("test123");
    let created = repo.create(new.clone()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.shortcode, "test123");
    assert_eq!(created.original_url, "https://example.com");
    assert_eq!(created.created_at, new.created_at);
    assert_eq!(created.expires_at, new.expires_at);
}

#[sqlx::test]
async fn test_create_duplicate_is_collision(pool: SqlitePool) {
    let repo = SqliteShortUrlRepository::new(Arc::new(pool));

    repo.create(new_short_url("dupe1")).await.unwrap();
    let result = repo.create(new_short_url("dupe1")).await;

    assert!(matches!(result, Err(AppError::ShortcodeCollision { .. })));
}

#[sqlx::test]
async fn test_find_by_shortcode(pool: SqlitePool) {
    common::create_active_short_url(&pool, "abc123", "https://example.com/a").await;
    let repo = SqliteShortUrlRepository::new(Arc::new(pool));

    let found = repo.find_by_shortcode("abc123").await.unwrap();

    let short_url = found.unwrap();
    assert_eq!(short_url.shortcode, "abc123");
    assert_eq!(short_url.original_url, "https://example.com/a");
    assert!(!short_url.is_expired());
}

#[sqlx::test]
async fn test_find_is_case_sensitive(pool: SqlitePool) {
    common::create_active_short_url(&pool, "AbCd12", "https://example.com").await;
    let repo = SqliteShortUrlRepository::new(Arc::new(pool));

    assert!(repo.find_by_shortcode("abcd12").await.unwrap().is_none());
    assert!(repo.find_by_shortcode("AbCd12").await.unwrap().is_some());
    assert!(!repo.exists_by_shortcode("ABCD12").await.unwrap());
}

#[sqlx::test]
async fn test_find_not_found(pool: SqlitePool) {
    let repo = SqliteShortUrlRepository::new(Arc::new(pool));

    assert!(repo.find_by_shortcode("nothere").await.unwrap().is_none());
    assert!(repo.find_with_clicks("nothere").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_exists_includes_expired(pool: SqlitePool) {
    common::create_expired_short_url(&pool, "gone1", "https://example.com").await;
    let repo = SqliteShortUrlRepository::new(Arc::new(pool));

    assert!(repo.exists_by_shortcode("gone1").await.unwrap());
    assert!(!repo.exists_by_shortcode("gone2").await.unwrap());
}

#[sqlx::test]
async fn test_find_with_clicks_in_insertion_order(pool: SqlitePool) {
    let id = common::create_active_short_url(&pool, "stats1", "https://example.com").await;
    let pool = Arc::new(pool);
    let short_urls = SqliteShortUrlRepository::new(pool.clone());
    let clicks = SqliteClickRepository::new(pool);

    for referrer in ["https://a.example", "", "https://c.example"] {
        clicks
            .record_click(NewClick {
                short_url_id: id,
                timestamp: Utc::now(),
                referrer: referrer.to_string(),
                geo: String::new(),
            })
            .await
            .unwrap();
    }

    let stats = short_urls.find_with_clicks("stats1").await.unwrap().unwrap();

    assert_eq!(stats.short_url.id, id);
    assert_eq!(stats.total_clicks(), 3);
    let referrers: Vec<&str> = stats.clicks.iter().map(|c| c.referrer.as_str()).collect();
    assert_eq!(referrers, vec!["https://a.example", "", "https://c.example"]);
}

#[sqlx::test]
async fn test_delete_cascades_to_clicks(pool: SqlitePool) {
    let id = common::create_active_short_url(&pool, "del123", "https://example.com").await;
    let shared = Arc::new(pool.clone());
    let short_urls = SqliteShortUrlRepository::new(shared.clone());
    let clicks = SqliteClickRepository::new(shared);

    clicks
        .record_click(NewClick {
            short_url_id: id,
            timestamp: Utc::now(),
            referrer: String::new(),
            geo: "NL".to_string(),
        })
        .await
        .unwrap();

    assert!(short_urls.delete("del123").await.unwrap());
    assert!(!short_urls.delete("del123").await.unwrap());
    assert!(!short_urls.exists_by_shortcode("del123").await.unwrap());
    assert_eq!(common::count_clicks(&pool, id).await, 0);
}

#[sqlx::test]
async fn test_count(pool: SqlitePool) {
    common::create_active_short_url(&pool, "count1", "https://example.com").await;
    common::create_expired_short_url(&pool, "count2", "https://example.com").await;
    let repo = SqliteShortUrlRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 2);
}
