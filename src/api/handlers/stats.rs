//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

const STACK: &str = "GET /shorturls/:shortcode";

/// Retrieves a short URL with its click history.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// Expired shortcodes stay queryable. Clicks are listed oldest first.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    match state.stats_service.get_stats(&shortcode).await {
        Ok(stats) => {
            state
                .log_service
                .info(STACK, format!("Stats retrieved: {shortcode}"));
            Ok(Json(stats.into()))
        }
        Err(e) => {
            state.log_service.report_error(STACK, &e);
            Err(e)
        }
    }
}
