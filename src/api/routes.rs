//! API route configuration.

use crate::api::handlers::{
    create_short_url_handler, health_handler, redirect_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorturls`              - Create a short URL
/// - `GET  /shorturls/{shortcode}`  - Statistics for a short URL
/// - `GET  /_health`                - Health check
/// - `GET  /{shortcode}`            - Redirect to the original URL
///
/// Static segments win over the `/{shortcode}` capture.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturls", post(create_short_url_handler))
        .route("/shorturls/{shortcode}", get(stats_handler))
        .route("/_health", get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
}
