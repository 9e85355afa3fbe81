//! Repository trait definitions for the domain layer.
//!
//! These traits are the narrow contract the services depend on for storage.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! - [`ShortUrlRepository`] - Short URL persistence and lookups
//! - [`ClickRepository`] - Click recording

pub mod click_repository;
pub mod short_url_repository;

pub use click_repository::ClickRepository;
pub use short_url_repository::ShortUrlRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
