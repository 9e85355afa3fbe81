//! Domain layer containing business entities and contracts.
//!
//! The domain layer has no dependency on HTTP or on a concrete database.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`log_event`] - Remote log event model
//! - [`log_worker`] - Background worker shipping log events
//!
//! # Log Shipping Flow
//!
//! 1. A handler reports an outcome through [`crate::application::services::LogService`]
//! 2. A [`log_event::LogEvent`] is pushed onto a bounded channel (never blocking)
//! 3. [`log_worker::run_log_worker`] ships it with retry logic
//! 4. Delivery goes through a [`crate::infrastructure::log_sink::LogSink`]

pub mod entities;
pub mod log_event;
pub mod log_worker;
pub mod repositories;
