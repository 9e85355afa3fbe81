//! HTTP middleware for request processing.
//!
//! Provides request reporting and tracing middleware.

pub mod request_log;
pub mod tracing;
