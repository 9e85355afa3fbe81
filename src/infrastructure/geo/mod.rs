//! Best-effort IP geolocation for click analytics.
//!
//! Provides a [`GeoLocator`] trait with two implementations:
//! - [`MaxMindGeoLocator`] - Country lookups against a GeoLite2/GeoIP2 `.mmdb` file
//! - [`NullGeoLocator`] - Always answers "unknown"

mod maxmind;
mod null_geo;
mod service;

pub use maxmind::MaxMindGeoLocator;
pub use null_geo::NullGeoLocator;
pub use service::{GeoError, GeoLocator, GeoResult};

#[cfg(test)]
pub use service::MockGeoLocator;
