//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a short URL is successfully resolved.
///
/// `referrer` and `geo` are empty strings when the information was not
/// available; a missing value never prevents the click from being stored.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub short_url_id: i64,
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub geo: String,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        id: i64,
        short_url_id: i64,
        timestamp: DateTime<Utc>,
        referrer: String,
        geo: String,
    ) -> Self {
        Self {
            id,
            short_url_id,
            timestamp,
            referrer,
            geo,
        }
    }
}

/// Input data for recording a new click.
///
/// `short_url_id` must reference an existing short URL.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub short_url_id: i64,
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub geo: String,
}
