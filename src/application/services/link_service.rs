//! Short URL creation service.

use std::sync::Arc;

use axum::http::HeaderValue;
use chrono::{Datelike, TimeDelta, Utc};
use serde_json::json;

use super::allocation_service::AllocationService;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Validity applied when a request does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Latest year an expiry may fall in; timestamps are stored as RFC 3339 text.
const MAX_EXPIRY_YEAR: i32 = 9999;

/// Input for creating a short URL.
///
/// Fields are already coerced from the wire format: `url` is `None` when the
/// client sent no string, `validity_minutes` is `None` when absent or not
/// numeric, and an empty `shortcode` means "generate one".
#[derive(Debug, Clone, Default)]
pub struct CreateShortUrl {
    pub url: Option<String>,
    pub validity_minutes: Option<i64>,
    pub shortcode: Option<String>,
}

/// Service creating short URLs.
///
/// Composes input validation, shortcode allocation, and expiry computation
/// into a single write.
pub struct LinkService<R: ShortUrlRepository> {
    repository: Arc<R>,
    allocation: AllocationService<R>,
    default_validity_minutes: i64,
}

impl<R: ShortUrlRepository> LinkService<R> {
    /// Creates a link service with default settings.
    pub fn new(repository: Arc<R>) -> Self {
        let allocation = AllocationService::new(repository.clone());
        Self::with_allocation(repository, allocation, DEFAULT_VALIDITY_MINUTES)
    }

    /// Creates a link service with an explicit allocator and default validity.
    pub fn with_allocation(
        repository: Arc<R>,
        allocation: AllocationService<R>,
        default_validity_minutes: i64,
    ) -> Self {
        Self {
            repository,
            allocation,
            default_validity_minutes,
        }
    }

    /// Creates and persists a short URL.
    ///
    /// # Flow
    ///
    /// 1. Reject a missing or empty `url`, or one that cannot be sent as a
    ///    `Location` header
    /// 2. Resolve validity (default when absent, must be positive)
    /// 3. Allocate the shortcode (requested or generated)
    /// 4. Persist with `expires_at = created_at + validity`
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] for a missing or unsendable url or a non-positive / out of range validity
    /// - Allocation errors unchanged (see [`AllocationService::allocate`])
    /// - [`AppError::ShortcodeCollision`] if another writer stored the code first
    /// - [`AppError::StoreFailure`] on database errors
    pub async fn create_short_url(&self, request: CreateShortUrl) -> Result<ShortUrl, AppError> {
        let original_url = request.url.filter(|url| !url.is_empty()).ok_or_else(|| {
            AppError::invalid_input("Missing or invalid 'url' field", json!({ "field": "url" }))
        })?;

        if HeaderValue::from_str(&original_url).is_err() {
            return Err(AppError::invalid_input(
                "'url' contains characters not allowed in a redirect",
                json!({ "field": "url" }),
            ));
        }

        let validity = self.resolve_validity(request.validity_minutes)?;

        let requested = request.shortcode.as_deref().filter(|code| !code.is_empty());
        let shortcode = self.allocation.allocate(requested).await?;

        let created_at = Utc::now();
        let expires_at = created_at
            .checked_add_signed(validity)
            .filter(|expires_at| expires_at.year() <= MAX_EXPIRY_YEAR)
            .ok_or_else(|| {
                AppError::invalid_input(
                    "Validity is out of range",
                    json!({ "validity": validity.num_minutes() }),
                )
            })?;

        let new_short_url = NewShortUrl {
            shortcode,
            original_url,
            created_at,
            expires_at,
        };

        self.repository.create(new_short_url).await
    }

    fn resolve_validity(&self, requested: Option<i64>) -> Result<TimeDelta, AppError> {
        let minutes = requested.unwrap_or(self.default_validity_minutes);

        if minutes <= 0 {
            return Err(AppError::invalid_input(
                "Validity must be a positive number of minutes",
                json!({ "validity": minutes }),
            ));
        }

        TimeDelta::try_minutes(minutes).ok_or_else(|| {
            AppError::invalid_input("Validity is out of range", json!({ "validity": minutes }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortUrlRepository;

    fn echo_created(mock_repo: &mut MockShortUrlRepository) {
        mock_repo.expect_create().times(1).returning(|new| {
            Ok(ShortUrl::new(
                1,
                new.shortcode,
                new.original_url,
                new.created_at,
                new.expires_at,
            ))
        });
    }

    fn request(url: &str) -> CreateShortUrl {
        CreateShortUrl {
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_with_defaults() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo
            .expect_exists_by_shortcode()
            .times(1)
            .returning(|_| Ok(false));
        echo_created(&mut mock_repo);

        let service = LinkService::new(Arc::new(mock_repo));

        let short_url = service
            .create_short_url(request("https://example.com"))
            .await
            .unwrap();

        assert_eq!(short_url.original_url, "https://example.com");
        assert_eq!(short_url.shortcode.len(), 6);
        assert!(short_url.shortcode.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(
            short_url.expires_at - short_url.created_at,
            TimeDelta::minutes(30)
        );
    }

    #[tokio::test]
    async fn test_create_with_validity_and_custom_code() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo
            .expect_exists_by_shortcode()
            .withf(|code| code == "mycode")
            .times(1)
            .returning(|_| Ok(false));
        echo_created(&mut mock_repo);

        let service = LinkService::new(Arc::new(mock_repo));

        let short_url = service
            .create_short_url(CreateShortUrl {
                url: Some("https://x.com".to_string()),
                validity_minutes: Some(1),
                shortcode: Some("mycode".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(short_url.shortcode, "mycode");
        assert_eq!(
            short_url.expires_at - short_url.created_at,
            TimeDelta::minutes(1)
        );
    }

    #[tokio::test]
    async fn test_configured_default_validity() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo
            .expect_exists_by_shortcode()
            .returning(|_| Ok(false));
        echo_created(&mut mock_repo);

        let repo = Arc::new(mock_repo);
        let allocation = AllocationService::with_code_length(repo.clone(), 8);
        let service = LinkService::with_allocation(repo, allocation, 120);

        let short_url = service
            .create_short_url(request("https://example.com"))
            .await
            .unwrap();

        assert_eq!(short_url.shortcode.len(), 8);
        assert_eq!(
            short_url.expires_at - short_url.created_at,
            TimeDelta::minutes(120)
        );
    }

    #[tokio::test]
    async fn test_missing_url_rejected() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo.expect_exists_by_shortcode().times(0);
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let missing = service.create_short_url(CreateShortUrl::default()).await;
        assert!(matches!(missing, Err(AppError::InvalidInput { .. })));

        let empty = service.create_short_url(request("")).await;
        assert!(matches!(empty, Err(AppError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn test_url_with_control_characters_rejected() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo.expect_exists_by_shortcode().times(0);
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        for url in ["https://example.com/a\nb", "https://example.com/\u{7f}"] {
            let result = service.create_short_url(request(url)).await;
            assert!(matches!(result, Err(AppError::InvalidInput { .. })), "url {url:?}");
        }
    }

    #[tokio::test]
    async fn test_non_positive_validity_rejected() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        for validity in [0, -5] {
            let result = service
                .create_short_url(CreateShortUrl {
                    url: Some("https://example.com".to_string()),
                    validity_minutes: Some(validity),
                    shortcode: None,
                })
                .await;

            assert!(matches!(result, Err(AppError::InvalidInput { .. })));
        }
    }

    #[tokio::test]
    async fn test_out_of_range_validity_rejected() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_url(CreateShortUrl {
                url: Some("https://example.com".to_string()),
                validity_minutes: Some(i64::MAX),
                shortcode: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::InvalidInput { .. })));

        let ten_thousand_years = 60 * 24 * 366 * 10_000;
        let result = service
            .create_short_url(CreateShortUrl {
                url: Some("https://example.com".to_string()),
                validity_minutes: Some(ten_thousand_years),
                shortcode: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn test_empty_shortcode_generates_one() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo
            .expect_exists_by_shortcode()
            .withf(|code| code.len() == 6)
            .times(1)
            .returning(|_| Ok(false));
        echo_created(&mut mock_repo);

        let service = LinkService::new(Arc::new(mock_repo));

        let short_url = service
            .create_short_url(CreateShortUrl {
                url: Some("https://example.com".to_string()),
                validity_minutes: None,
                shortcode: Some(String::new()),
            })
            .await
            .unwrap();

        assert_eq!(short_url.shortcode.len(), 6);
    }

    #[tokio::test]
    async fn test_invalid_custom_code_surfaces() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_url(CreateShortUrl {
                url: Some("https://example.com".to_string()),
                validity_minutes: None,
                shortcode: Some("no!".to_string()),
            })
            .await;

        assert!(matches!(result, Err(AppError::InvalidShortcode { .. })));
    }

    #[tokio::test]
    async fn test_write_time_collision_is_authoritative() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo
            .expect_exists_by_shortcode()
            .times(1)
            .returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::collision("Shortcode already exists", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_url(CreateShortUrl {
                url: Some("https://example.com".to_string()),
                validity_minutes: None,
                shortcode: Some("raced1".to_string()),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::ShortcodeCollision { .. })
        ));
    }
}
