//! Handler for short URL creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::api::dto::create::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

const STACK: &str = "POST /shorturls";

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 60,        // optional, minutes (default: 30)
///   "shortcode": "mycode"  // optional, 4-32 alphanumerics
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortcode": "mycode",
///   "url": "https://example.com/some/long/path",
///   "createdAt": "2025-01-01T12:00:00Z",
///   "expiresAt": "2025-01-01T13:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not a JSON object, `url` is missing, validity is not
///   positive, or the shortcode is malformed
/// - 409 if the shortcode is taken
/// - 500 if no free shortcode could be generated or the store failed
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let result = create(&state, payload).await;

    match &result {
        Ok(short_url) => state
            .log_service
            .info(STACK, format!("Short URL created: {}", short_url.shortcode)),
        Err(e) => state.log_service.report_error(STACK, e),
    }

    result.map(|short_url| (StatusCode::CREATED, Json(short_url)))
}

async fn create(
    state: &AppState,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<CreateShortUrlResponse, AppError> {
    // Taken as a map so an array body cannot fill the fields by position.
    let Json(body) = payload.map_err(|rejection| {
        AppError::invalid_input(
            "Request body must be a JSON object",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let request = CreateShortUrlRequest::deserialize(Value::Object(body)).map_err(|e| {
        AppError::invalid_input(
            "Request body must be a JSON object",
            json!({ "reason": e.to_string() }),
        )
    })?;
    let short_url = state.link_service.create_short_url(request.into()).await?;

    Ok(short_url.into())
}
