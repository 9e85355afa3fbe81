//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::application::services::RequestMeta;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

const STACK: &str = "GET /:shortcode";

/// Redirects a shortcode to its original URL and records the click.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Request Flow
///
/// 1. Look up the shortcode (exact, case-sensitive)
/// 2. Refuse expired records
/// 3. Record a click with referrer and best-effort country
/// 4. Return `302 Found` with `Location`
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
/// Returns 410 Gone if the shortcode expired.
pub async fn redirect_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let meta = RequestMeta {
        ip: Some(client_ip(&headers, addr, state.behind_proxy)),
        referrer: headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };

    let result = state
        .redirect_service
        .resolve_and_track(&shortcode, meta)
        .await;

    match result {
        Ok(tracked) => {
            state
                .log_service
                .info(STACK, format!("Redirected: {shortcode}"));
            Ok((StatusCode::FOUND, [(header::LOCATION, tracked.location)]))
        }
        Err(e) => {
            state.log_service.report_error(STACK, &e);
            Err(e)
        }
    }
}
