//! Remote log shipping.
//!
//! Provides a [`LogSink`] trait with two implementations:
//! - [`HttpLogSink`] - POSTs events as JSON to a log collector
//! - [`NullLogSink`] - Discards events when no collector is configured

mod http_sink;
mod null_sink;
mod service;

pub use http_sink::HttpLogSink;
pub use null_sink::NullLogSink;
pub use service::{LogSink, LogSinkError, LogSinkResult};
