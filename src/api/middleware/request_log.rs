//! Reports every incoming request to the remote log sink.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

const STACK: &str = "requestLogger";

/// Emits `Incoming METHOD PATH` at `INFO` before the request is handled.
///
/// The query string is part of the reported path. Reporting never delays or
/// fails the request.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{shortcode}", get(redirect_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), request_log::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.uri().path());

    st.log_service
        .info(STACK, format!("Incoming {} {}", req.method(), target));

    next.run(req).await
}
