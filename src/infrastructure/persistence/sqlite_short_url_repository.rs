//! SQLite implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Click, NewShortUrl, ShortUrl, ShortUrlWithClicks};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ShortUrlRow {
    id: i64,
    shortcode: String,
    original_url: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(r: ShortUrlRow) -> Self {
        ShortUrl::new(r.id, r.shortcode, r.original_url, r.created_at, r.expires_at)
    }
}

#[derive(FromRow)]
struct ClickRow {
    id: i64,
    short_url_id: i64,
    timestamp: DateTime<Utc>,
    referrer: String,
    geo: String,
}

impl From<ClickRow> for Click {
    fn from(r: ClickRow) -> Self {
        Click::new(r.id, r.short_url_id, r.timestamp, r.referrer, r.geo)
    }
}

/// SQLite repository for short URL records.
pub struct SqliteShortUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for SqliteShortUrlRepository {
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (shortcode, original_url, created_at, expires_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, shortcode, original_url, created_at, expires_at
            "#,
        )
        .bind(&new_short_url.shortcode)
        .bind(&new_short_url.original_url)
        .bind(new_short_url.created_at)
        .bind(new_short_url.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, shortcode, original_url, created_at, expires_at
            FROM short_urls
            WHERE shortcode = ?
            "#,
        )
        .bind(shortcode)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn exists_by_shortcode(&self, shortcode: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM short_urls WHERE shortcode = ?)",
        )
        .bind(shortcode)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn find_with_clicks(
        &self,
        shortcode: &str,
    ) -> Result<Option<ShortUrlWithClicks>, AppError> {
        let Some(short_url) = self.find_by_shortcode(shortcode).await? else {
            return Ok(None);
        };

        let clicks = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, short_url_id, timestamp, referrer, geo
            FROM clicks
            WHERE short_url_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(short_url.id)
        .fetch_all(self.pool.as_ref())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

        Ok(Some(ShortUrlWithClicks { short_url, clicks }))
    }

    async fn delete(&self, shortcode: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_urls WHERE shortcode = ?")
            .bind(shortcode)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
