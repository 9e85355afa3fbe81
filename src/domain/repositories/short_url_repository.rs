//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl, ShortUrlWithClicks};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteShortUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_short_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Persists a new short URL.
    ///
    /// The store's unique constraint on `shortcode` is authoritative: a
    /// concurrent writer that won the race makes this call fail even if an
    /// earlier existence check passed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortcodeCollision`] if the shortcode already exists.
    /// Returns [`AppError::StoreFailure`] on database errors.
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a short URL by exact (case-sensitive) shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreFailure`] on database errors.
    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Returns true if any record, expired or not, holds `shortcode`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreFailure`] on database errors.
    async fn exists_by_shortcode(&self, shortcode: &str) -> Result<bool, AppError>;

    /// Loads a short URL together with all its clicks, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreFailure`] on database errors.
    async fn find_with_clicks(
        &self,
        shortcode: &str,
    ) -> Result<Option<ShortUrlWithClicks>, AppError>;

    /// Deletes a short URL and, by cascade, its clicks.
    ///
    /// Returns `Ok(false)` if nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreFailure`] on database errors.
    async fn delete(&self, shortcode: &str) -> Result<bool, AppError>;

    /// Counts all short URLs, including expired ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreFailure`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
