//! Business logic services for the application layer.

pub mod allocation_service;
pub mod link_service;
pub mod log_service;
pub mod redirect_service;
pub mod stats_service;

pub use allocation_service::AllocationService;
pub use link_service::{CreateShortUrl, LinkService};
pub use log_service::LogService;
pub use redirect_service::{RedirectService, RequestMeta, TrackedRedirect};
pub use stats_service::StatsService;
