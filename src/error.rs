//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure a core operation can produce is one [`AppError`] variant.
//! Handlers return `Result<_, AppError>` and rely on [`IntoResponse`] to
//! produce a uniform JSON body:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Shortcode not found", "details": { "shortcode": "abc123" } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::log_event::LogLevel;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    #[error("{message}")]
    InvalidShortcode { message: String, details: Value },

    #[error("{message}")]
    ShortcodeCollision { message: String, details: Value },

    #[error("{message}")]
    AllocationExhausted { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Expired { message: String, details: Value },

    #[error("{message}")]
    StoreFailure { message: String, details: Value },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_shortcode(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidShortcode {
            message: message.into(),
            details,
        }
    }

    pub fn collision(message: impl Into<String>, details: Value) -> Self {
        Self::ShortcodeCollision {
            message: message.into(),
            details,
        }
    }

    pub fn allocation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::AllocationExhausted {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }

    pub fn store_failure(message: impl Into<String>, details: Value) -> Self {
        Self::StoreFailure {
            message: message.into(),
            details,
        }
    }

    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } | Self::InvalidShortcode { .. } => StatusCode::BAD_REQUEST,
            Self::ShortcodeCollision { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Expired { .. } => StatusCode::GONE,
            Self::AllocationExhausted { .. } | Self::StoreFailure { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable error code used in the JSON body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::InvalidShortcode { .. } => "invalid_shortcode",
            Self::ShortcodeCollision { .. } => "shortcode_collision",
            Self::AllocationExhausted { .. } => "allocation_exhausted",
            Self::NotFound { .. } => "not_found",
            Self::Expired { .. } => "expired",
            Self::StoreFailure { .. } => "internal_error",
        }
    }

    /// Severity used when the error is reported to the log sink.
    ///
    /// Client-caused failures are `WARN`, server-side failures are `ERROR`.
    pub fn log_level(&self) -> LogLevel {
        if self.status_code().is_server_error() {
            LogLevel::Error
        } else {
            LogLevel::Warn
        }
    }

    /// Converts the error into the payload sent to clients.
    ///
    /// Store failures never expose their internals.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            Self::StoreFailure { .. } => ("Internal server error".to_string(), json!({})),
            Self::InvalidInput { message, details }
            | Self::InvalidShortcode { message, details }
            | Self::ShortcodeCollision { message, details }
            | Self::AllocationExhausted { message, details }
            | Self::NotFound { message, details }
            | Self::Expired { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Maps a database error onto the taxonomy.
///
/// The only unique constraint in the schema is `short_urls.shortcode`, so any
/// unique violation is a shortcode collision detected at write time.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::collision(
            "Shortcode already exists",
            json!({ "constraint": db.constraint() }),
        );
    }

    tracing::error!(error = %e, "Database error");
    AppError::store_failure("Database error", json!({ "reason": e.to_string() }))
}
