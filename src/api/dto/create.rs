//! DTOs for short URL creation.
//!
//! The request body is loose: clients send `validity` as a number or a
//! numeric string and may omit any field. Values of the wrong type count as
//! absent and the rules are left to the service.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};

use crate::application::services::CreateShortUrl;
use crate::domain::entities::ShortUrl;

/// Request body for `POST /shorturls`.
///
/// - `url`: kept only when it is a string
/// - `validity`: minutes from a number or a numeric string, fraction
///   truncated; anything else counts as absent
/// - `shortcode`: a string as-is; `null`, `false`, `0` and `""` as absent;
///   any other value as its JSON text
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct CreateShortUrlRequest {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub url: Option<String>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    pub validity: Option<Minutes>,

    #[serde(default, deserialize_with = "shortcode_or_absent")]
    pub shortcode: Option<String>,
}

/// Validity in minutes as sent by the client.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Minutes(f64);

impl Minutes {
    /// Whole minutes, or `None` when the value does not fit an `i64`.
    pub fn whole(self) -> Option<i64> {
        let truncated = self.0.trunc();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        (truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64)
            .then_some(truncated as i64)
    }
}

impl FromStr for Minutes {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Minutes)
    }
}

impl From<CreateShortUrlRequest> for CreateShortUrl {
    fn from(request: CreateShortUrlRequest) -> Self {
        Self {
            url: request.url,
            validity_minutes: request.validity.and_then(Minutes::whole),
            shortcode: request.shortcode,
        }
    }
}

fn shortcode_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null | Value::Bool(false)) => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::String(s)) => Some(s).filter(|s| !s.is_empty()),
        Some(other) => Some(other.to_string()),
    };

    Ok(code)
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    pub shortcode: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<ShortUrl> for CreateShortUrlResponse {
    fn from(short_url: ShortUrl) -> Self {
        Self {
            shortcode: short_url.shortcode,
            url: short_url.original_url,
            created_at: short_url.created_at,
            expires_at: short_url.expires_at,
        }
    }
}
