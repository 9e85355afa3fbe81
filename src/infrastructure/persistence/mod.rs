//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! bound parameters.
//!
//! - [`SqliteShortUrlRepository`] - Short URL storage and retrieval
//! - [`SqliteClickRepository`] - Click recording

pub mod sqlite_click_repository;
pub mod sqlite_short_url_repository;

pub use sqlite_click_repository::SqliteClickRepository;
pub use sqlite_short_url_repository::SqliteShortUrlRepository;
