//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`              - Create a short URL
//! - `GET  /shorturls/{shortcode}`  - Statistics
//! - `GET  /_health`                - Health check: DB, log queue, geo
//! - `GET  /{shortcode}`            - Redirect
//!
//! # Middleware
//!
//! - **Request reporting** - `Incoming METHOD PATH` shipped to the log sink
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (see [`normalize`])

use crate::api;
use crate::api::middleware::{request_log, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            request_log::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps the router so that `/abc123/` and `/abc123` reach the same handler.
///
/// Path normalization has to run before routing, so it wraps the finished
/// router instead of being one of its layers.
pub fn normalize(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
