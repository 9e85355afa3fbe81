//! Infrastructure layer for external integrations.
//!
//! Implements the seams defined by the domain layer.
//!
//! - [`persistence`] - SQLite repository implementations
//! - [`geo`] - IP geolocation (MaxMind and no-op implementations)
//! - [`log_sink`] - Remote log shipping (HTTP and no-op implementations)

pub mod geo;
pub mod log_sink;
pub mod persistence;
