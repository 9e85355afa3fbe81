//! Geo locator trait and error types.

use async_trait::async_trait;
use std::net::IpAddr;
use thiserror::Error;

/// Errors that can occur during a geo lookup.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Geo database error: {0}")]
    Database(String),

    #[error("Geo lookup error: {0}")]
    Lookup(String),
}

/// Result type for geo operations.
pub type GeoResult<T> = Result<T, GeoError>;

/// Resolves client IP addresses to ISO country codes.
///
/// Callers treat every error as "unknown": a failed lookup must never fail
/// the redirect it belongs to.
///
/// # Implementations
///
/// - [`crate::infrastructure::geo::MaxMindGeoLocator`] - MaxMind database reader
/// - [`crate::infrastructure::geo::NullGeoLocator`] - No-op implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Looks up the country of `ip`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(code))` with an ISO 3166-1 alpha-2 code (e.g. `"DE"`)
    /// - `Ok(None)` if the address is unknown (private ranges, loopback, ...)
    async fn lookup_country(&self, ip: IpAddr) -> GeoResult<Option<String>>;

    /// Short name used in traces and health output.
    fn name(&self) -> &'static str;
}
