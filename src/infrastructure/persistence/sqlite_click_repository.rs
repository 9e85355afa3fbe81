//! SQLite implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct InsertedClick {
    id: i64,
    short_url_id: i64,
    timestamp: DateTime<Utc>,
    referrer: String,
    geo: String,
}

/// SQLite repository for click events.
pub struct SqliteClickRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for SqliteClickRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, InsertedClick>(
            r#"
            INSERT INTO clicks (short_url_id, timestamp, referrer, geo)
            VALUES (?, ?, ?, ?)
            RETURNING id, short_url_id, timestamp, referrer, geo
            "#,
        )
        .bind(new_click.short_url_id)
        .bind(new_click.timestamp)
        .bind(&new_click.referrer)
        .bind(&new_click.geo)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Click::new(
            row.id,
            row.short_url_id,
            row.timestamp,
            row.referrer,
            row.geo,
        ))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
