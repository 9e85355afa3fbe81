//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{
    AllocationService, LinkService, LogService, RedirectService, StatsService,
};
use crate::application::services::link_service::DEFAULT_VALIDITY_MINUTES;
use crate::infrastructure::geo::GeoLocator;
use crate::infrastructure::persistence::{SqliteClickRepository, SqliteShortUrlRepository};
use crate::utils::shortcode::DEFAULT_SHORTCODE_LENGTH;

/// Tunables applied when wiring the services.
#[derive(Debug, Clone)]
pub struct StateOptions {
    pub shortcode_length: usize,
    pub default_validity_minutes: i64,
    /// Read the client IP from `X-Forwarded-For` / `X-Real-IP`.
    pub behind_proxy: bool,
}

impl Default for StateOptions {
    fn default() -> Self {
        Self {
            shortcode_length: DEFAULT_SHORTCODE_LENGTH,
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            behind_proxy: false,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteShortUrlRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteShortUrlRepository, SqliteClickRepository>>,
    pub stats_service: Arc<StatsService<SqliteShortUrlRepository, SqliteClickRepository>>,
    pub log_service: LogService,
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        pool: Arc<SqlitePool>,
        geo: Arc<dyn GeoLocator>,
        log_service: LogService,
        options: StateOptions,
    ) -> Self {
        let short_url_repository = Arc::new(SqliteShortUrlRepository::new(pool.clone()));
        let click_repository = Arc::new(SqliteClickRepository::new(pool));

        let allocation = AllocationService::with_code_length(
            short_url_repository.clone(),
            options.shortcode_length,
        );

        Self {
            link_service: Arc::new(LinkService::with_allocation(
                short_url_repository.clone(),
                allocation,
                options.default_validity_minutes,
            )),
            redirect_service: Arc::new(RedirectService::new(
                short_url_repository.clone(),
                click_repository.clone(),
                geo,
            )),
            stats_service: Arc::new(StatsService::new(short_url_repository, click_repository)),
            log_service,
            behind_proxy: options.behind_proxy,
        }
    }
}
