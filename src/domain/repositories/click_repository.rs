//! Repository trait for click recording.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click events.
///
/// Clicks are append-only: there is no update and no delete. They disappear
/// only when their owning short URL is removed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteClickRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a new click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreFailure`] if the owning short URL no longer
    /// exists or on database errors.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts all recorded clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreFailure`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
