//! # shorturls
//!
//! A URL shortening service with expiring links and click analytics, built
//! with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, repository traits, log events
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite, geolocation, and log shipping
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Custom or generated shortcodes (4-32 alphanumerics)
//! - Per-link validity with `410 Gone` after expiry
//! - Click tracking with referrer and country
//! - Fire-and-forget log shipping to a remote collector, with retry logic
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: ship logs and resolve countries
//! export LOG_SINK_URL="http://localhost:9000/logs"
//! export GEOIP_DB_PATH="./GeoLite2-Country.mmdb"
//!
//! # Start the service (migrations run on startup)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CreateShortUrl, LinkService, LogService, RedirectService, RequestMeta, StatsService,
    };
    pub use crate::domain::entities::{Click, NewClick, NewShortUrl, ShortUrl, ShortUrlWithClicks};
    pub use crate::error::AppError;
    pub use crate::state::{AppState, StateOptions};
}
