//! DTOs for short URL statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::entities::ShortUrlWithClicks;

/// Statistics of one short URL with every click, oldest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub total_clicks: usize,
    pub clicks: Vec<ClickInfo>,
}

impl From<ShortUrlWithClicks> for StatsResponse {
    fn from(stats: ShortUrlWithClicks) -> Self {
        let total_clicks = stats.total_clicks();
        let short_url = stats.short_url;

        Self {
            shortcode: short_url.shortcode,
            original_url: short_url.original_url,
            created_at: short_url.created_at,
            expires_at: short_url.expires_at,
            total_clicks,
            clicks: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
