//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation, and business rules, and
//! give HTTP handlers a storage-agnostic API.
//!
//! # Available Services
//!
//! - [`services::allocation_service::AllocationService`] - Shortcode allocation
//! - [`services::link_service::LinkService`] - Short URL creation
//! - [`services::redirect_service::RedirectService`] - Resolution and click tracking
//! - [`services::stats_service::StatsService`] - Per-code statistics and totals
//! - [`services::log_service::LogService`] - Fire-and-forget remote log reporting

pub mod services;
