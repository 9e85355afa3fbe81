//! Shortcode allocation service.

use std::sync::Arc;

use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::shortcode::{DEFAULT_SHORTCODE_LENGTH, generate_shortcode, is_valid_shortcode};
use serde_json::json;

/// Upper bound on generate-and-probe rounds for one allocation.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 10;

/// Service producing shortcodes that are free at the time of the check.
///
/// The check is a read: two concurrent allocations may both succeed with the
/// same code. The unique constraint on the store decides the winner when the
/// record is written, and the loser gets [`AppError::ShortcodeCollision`].
pub struct AllocationService<R: ShortUrlRepository> {
    repository: Arc<R>,
    code_length: usize,
}

impl<R: ShortUrlRepository> AllocationService<R> {
    /// Creates an allocation service generating codes of the default length.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_code_length(repository, DEFAULT_SHORTCODE_LENGTH)
    }

    /// Creates an allocation service generating codes of `code_length` characters.
    pub fn with_code_length(repository: Arc<R>, code_length: usize) -> Self {
        Self {
            repository,
            code_length,
        }
    }

    /// Allocates a shortcode, honouring `requested` when given.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidShortcode`] if `requested` is not 4-32 alphanumerics
    /// - [`AppError::ShortcodeCollision`] if `requested` is already taken
    /// - [`AppError::AllocationExhausted`] if every generated candidate was taken
    /// - [`AppError::StoreFailure`] on database errors
    pub async fn allocate(&self, requested: Option<&str>) -> Result<String, AppError> {
        match requested {
            Some(code) => self.claim_requested(code).await,
            None => self.generate_unique().await,
        }
    }

    async fn claim_requested(&self, code: &str) -> Result<String, AppError> {
        if !is_valid_shortcode(code) {
            return Err(AppError::invalid_shortcode(
                "Invalid shortcode",
                json!({ "shortcode": code, "pattern": "^[a-zA-Z0-9]{4,32}$" }),
            ));
        }

        if self.repository.exists_by_shortcode(code).await? {
            return Err(AppError::collision(
                "Shortcode already exists",
                json!({ "shortcode": code }),
            ));
        }

        Ok(code.to_string())
    }

    async fn generate_unique(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let code = generate_shortcode(self.code_length);

            if !self.repository.exists_by_shortcode(&code).await? {
                return Ok(code);
            }

            tracing::debug!(attempt, code = %code, "Generated shortcode collided");
        }

        Err(AppError::allocation_exhausted(
            "Failed to generate unique shortcode",
            json!({ "attempts": MAX_ALLOCATION_ATTEMPTS }),
        ))
    }
}
