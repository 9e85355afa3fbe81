//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /_health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Counts stored short URLs
/// 2. **Log Queue**: Checks if the channel is open and reports free capacity
/// 3. **Geo**: Reports the active locator (never degrades the service)
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 42 short URLs" },
///     "log_queue": { "status": "ok", "message": "Capacity: 1000" },
///     "geo": { "status": "ok", "message": "Locator: maxmind" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let queue_check = check_log_queue(&state);

    let geo_check = CheckStatus::ok(format!(
        "Locator: {}",
        state.redirect_service.geo_name()
    ));

    let all_healthy = db_check.is_ok() && queue_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            log_queue: queue_check,
            geo: geo_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.stats_service.count_short_urls().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {count} short URLs")),
        Err(e) => CheckStatus::error(format!("Database error: {e}")),
    }
}

fn check_log_queue(state: &AppState) -> CheckStatus {
    if state.log_service.is_closed() {
        CheckStatus::error("Log queue is closed")
    } else {
        CheckStatus::ok(format!("Capacity: {}", state.log_service.capacity()))
    }
}
