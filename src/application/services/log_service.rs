//! Fire-and-forget reporting to the remote log sink.

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};

use crate::domain::log_event::{LogEvent, LogLevel};
use crate::error::AppError;

/// Default `package` field of shipped events.
pub const DEFAULT_LOG_PACKAGE: &str = "url-shortener";

/// Handle used by handlers to report outcomes.
///
/// Cloning is cheap; every clone feeds the same bounded queue drained by
/// [`crate::domain::log_worker::run_log_worker`]. Emitting never blocks and
/// never fails: a full or closed queue drops the event.
#[derive(Clone)]
pub struct LogService {
    sender: mpsc::Sender<LogEvent>,
    package: Arc<str>,
}

impl LogService {
    pub fn new(sender: mpsc::Sender<LogEvent>, package: impl Into<Arc<str>>) -> Self {
        Self {
            sender,
            package: package.into(),
        }
    }

    /// Creates a service together with the receiving end of its queue.
    pub fn channel(
        package: impl Into<Arc<str>>,
        capacity: usize,
    ) -> (Self, mpsc::Receiver<LogEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx, package), rx)
    }

    /// Queues an event and mirrors it into `tracing`.
    pub fn emit(&self, stack: &str, level: LogLevel, message: impl Into<String>) {
        let message = message.into();

        match level {
            LogLevel::Debug => tracing::debug!(stack, "{message}"),
            LogLevel::Info => tracing::info!(stack, "{message}"),
            LogLevel::Warn => tracing::warn!(stack, "{message}"),
            LogLevel::Error | LogLevel::Fatal => tracing::error!(stack, %level, "{message}"),
        }

        let event = LogEvent::new(stack, level, self.package.as_ref(), message);

        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => tracing::debug!(stack, "Log queue full, event dropped"),
            Err(TrySendError::Closed(_)) => {
                tracing::debug!(stack, "Log queue closed, event dropped")
            }
        }
    }

    pub fn info(&self, stack: &str, message: impl Into<String>) {
        self.emit(stack, LogLevel::Info, message);
    }

    pub fn warn(&self, stack: &str, message: impl Into<String>) {
        self.emit(stack, LogLevel::Warn, message);
    }

    pub fn error(&self, stack: &str, message: impl Into<String>) {
        self.emit(stack, LogLevel::Error, message);
    }

    /// Reports a failed operation at the severity the error calls for.
    pub fn report_error(&self, stack: &str, err: &AppError) {
        self.emit(stack, err.log_level(), err.to_string());
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Free slots left in the queue.
    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }
}
