//! MaxMind database backed geo locator.

use async_trait::async_trait;
use maxminddb::{MaxMindDBError, Reader, geoip2};
use std::net::IpAddr;
use std::path::Path;
use tracing::info;

use super::service::{GeoError, GeoLocator, GeoResult};

/// Country lookups against a GeoLite2/GeoIP2 database loaded into memory.
///
/// Lookups are in-memory tree walks, so they run inline on the request task.
pub struct MaxMindGeoLocator {
    reader: Reader<Vec<u8>>,
}

impl MaxMindGeoLocator {
    /// Loads the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Database`] if the file is missing or not a valid
    /// MaxMind database.
    pub fn open(path: impl AsRef<Path>) -> GeoResult<Self> {
        let path = path.as_ref();
        let reader =
            Reader::open_readfile(path).map_err(|e| GeoError::Database(e.to_string()))?;

        info!(
            path = %path.display(),
            database_type = %reader.metadata.database_type,
            "Geo database loaded"
        );

        Ok(Self { reader })
    }
}

#[async_trait]
impl GeoLocator for MaxMindGeoLocator {
    async fn lookup_country(&self, ip: IpAddr) -> GeoResult<Option<String>> {
        match self.reader.lookup::<geoip2::Country>(ip) {
            Ok(record) => Ok(record
                .country
                .and_then(|country| country.iso_code)
                .map(str::to_string)),
            Err(MaxMindDBError::AddressNotFoundError(_)) => Ok(None),
            Err(e) => Err(GeoError::Lookup(e.to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "maxmind"
    }
}
