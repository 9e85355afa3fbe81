//! Log sink trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::log_event::LogEvent;

/// Errors that can occur while shipping a log event.
#[derive(Debug, Error)]
pub enum LogSinkError {
    #[error("Log sink delivery error: {0}")]
    Delivery(String),

    #[error("Log sink rejected event with status {0}")]
    Rejected(u16),
}

/// Result type for log sink operations.
pub type LogSinkResult<T> = Result<T, LogSinkError>;

/// Destination for shipped log events.
///
/// Sink errors are only ever seen by the log worker; they never reach a
/// request handler.
///
/// # Implementations
///
/// - [`crate::infrastructure::log_sink::HttpLogSink`] - HTTP collector
/// - [`crate::infrastructure::log_sink::NullLogSink`] - No-op sink
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Delivers one event.
    async fn send(&self, event: &LogEvent) -> LogSinkResult<()>;

    /// Short name used in traces and health output.
    fn name(&self) -> &'static str;
}
