//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::ShortUrlWithClicks;
use crate::domain::repositories::{ClickRepository, ShortUrlRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for reading short URL statistics.
///
/// Statistics do not check expiry: an expired code stays queryable for as
/// long as its record exists.
pub struct StatsService<S: ShortUrlRepository, C: ClickRepository> {
    short_urls: Arc<S>,
    clicks: Arc<C>,
}

impl<S: ShortUrlRepository, C: ClickRepository> StatsService<S, C> {
    /// Creates a new statistics service.
    pub fn new(short_urls: Arc<S>, clicks: Arc<C>) -> Self {
        Self { short_urls, clicks }
    }

    /// Retrieves a short URL with every click, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record holds `shortcode`.
    /// Returns [`AppError::StoreFailure`] on database errors.
    pub async fn get_stats(&self, shortcode: &str) -> Result<ShortUrlWithClicks, AppError> {
        self.short_urls
            .find_with_clicks(shortcode)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Shortcode not found", json!({ "shortcode": shortcode }))
            })
    }

    /// Counts all short URLs, expired ones included.
    pub async fn count_short_urls(&self) -> Result<i64, AppError> {
        self.short_urls.count().await
    }

    /// Counts all recorded clicks.
    pub async fn count_clicks(&self) -> Result<i64, AppError> {
        self.clicks.count().await
    }
}
