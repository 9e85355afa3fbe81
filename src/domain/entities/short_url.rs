//! ShortUrl entity representing a shortcode → target URL mapping.

use chrono::{DateTime, Utc};

use super::click::Click;

/// A shortened URL with its validity window.
///
/// Records are immutable once created; only clicks are appended to them.
/// An expired record keeps its shortcode reserved.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub id: i64,
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        shortcode: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            shortcode,
            original_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the record is expired at `now`.
    ///
    /// The expiry instant itself already counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Returns true if the record has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for persisting a new short URL.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// A short URL loaded together with its clicks in insertion order.
#[derive(Debug, Clone)]
pub struct ShortUrlWithClicks {
    pub short_url: ShortUrl,
    pub clicks: Vec<Click>,
}

impl ShortUrlWithClicks {
    pub fn total_clicks(&self) -> usize {
        self.clicks.len()
    }
}
