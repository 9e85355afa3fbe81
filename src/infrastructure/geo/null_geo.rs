//! No-op geo locator used when no database is configured.

use super::service::{GeoLocator, GeoResult};
use async_trait::async_trait;
use std::net::IpAddr;
use tracing::debug;

/// A locator that never knows where an address is.
///
/// Clicks recorded through it carry an empty geo field.
pub struct NullGeoLocator;

impl NullGeoLocator {
    /// Creates a new NullGeoLocator instance.
    pub fn new() -> Self {
        debug!("Using NullGeoLocator (geolocation disabled)");
        Self
    }
}

impl Default for NullGeoLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeoLocator for NullGeoLocator {
    async fn lookup_country(&self, _ip: IpAddr) -> GeoResult<Option<String>> {
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "null"
    }
}
