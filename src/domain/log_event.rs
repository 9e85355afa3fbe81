//! Log event model for asynchronous remote log shipping.

use serde::Serialize;
use std::fmt;

/// Severity of a shipped log event.
///
/// Serialized in upper case (`"INFO"`, `"WARN"`, ...) as expected by the
/// remote log collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An in-memory log event on its way to the log sink.
///
/// Created by [`crate::application::services::LogService`], passed through a
/// bounded channel, and shipped by
/// [`crate::domain::log_worker::run_log_worker`]. The serialized form is the
/// wire payload:
///
/// ```json
/// { "stack": "POST /shorturls", "level": "INFO", "package": "url-shortener", "message": "Short URL created: abc123" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub stack: String,
    pub level: LogLevel,
    pub package: String,
    pub message: String,
}

impl LogEvent {
    pub fn new(
        stack: impl Into<String>,
        level: LogLevel,
        package: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stack: stack.into(),
            level,
            package: package.into(),
            message: message.into(),
        }
    }
}
