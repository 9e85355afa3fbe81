//! Redirect resolution and click tracking.

use std::net::IpAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{ClickRepository, ShortUrlRepository};
use crate::error::AppError;
use crate::infrastructure::geo::GeoLocator;

/// Request metadata captured for a click.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub ip: Option<IpAddr>,
    pub referrer: Option<String>,
}

/// A successful resolution: where to send the client and the click it produced.
#[derive(Debug, Clone)]
pub struct TrackedRedirect {
    pub location: HeaderValue,
    pub click: Click,
}

/// Service resolving shortcodes and recording one click per successful resolve.
pub struct RedirectService<S: ShortUrlRepository, C: ClickRepository> {
    short_urls: Arc<S>,
    clicks: Arc<C>,
    geo: Arc<dyn GeoLocator>,
}

impl<S: ShortUrlRepository, C: ClickRepository> RedirectService<S, C> {
    pub fn new(short_urls: Arc<S>, clicks: Arc<C>, geo: Arc<dyn GeoLocator>) -> Self {
        Self {
            short_urls,
            clicks,
            geo,
        }
    }

    /// Name of the configured geo locator.
    pub fn geo_name(&self) -> &'static str {
        self.geo.name()
    }

    /// Resolves `shortcode` and records a click.
    ///
    /// Expired records are kept in the store and keep answering
    /// [`AppError::Expired`]. Geolocation is best-effort: any failure leaves
    /// the click's `geo` empty.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no record holds `shortcode`
    /// - [`AppError::Expired`] if the record expired
    /// - [`AppError::StoreFailure`] on database errors, or when the stored URL
    ///   cannot be sent as a `Location` header (no click is recorded then)
    pub async fn resolve_and_track(
        &self,
        shortcode: &str,
        meta: RequestMeta,
    ) -> Result<TrackedRedirect, AppError> {
        let short_url = self
            .short_urls
            .find_by_shortcode(shortcode)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Shortcode not found", json!({ "shortcode": shortcode }))
            })?;

        let now = Utc::now();
        if short_url.is_expired_at(now) {
            return Err(AppError::expired(
                "Shortcode expired",
                json!({ "shortcode": shortcode, "expiresAt": short_url.expires_at }),
            ));
        }

        let location = HeaderValue::from_str(&short_url.original_url).map_err(|_| {
            AppError::store_failure(
                "Stored URL is not a valid Location header",
                json!({ "shortcode": shortcode }),
            )
        })?;

        let geo = match meta.ip {
            Some(ip) => self.locate(ip).await,
            None => String::new(),
        };

        let click = self
            .clicks
            .record_click(NewClick {
                short_url_id: short_url.id,
                timestamp: now,
                referrer: meta.referrer.unwrap_or_default(),
                geo,
            })
            .await?;

        Ok(TrackedRedirect { location, click })
    }

    async fn locate(&self, ip: IpAddr) -> String {
        match self.geo.lookup_country(ip).await {
            Ok(country) => country.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(locator = self.geo.name(), %ip, error = %e, "Geo lookup failed");
                String::new()
            }
        }
    }
}
