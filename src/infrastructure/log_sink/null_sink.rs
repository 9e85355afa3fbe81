//! No-op log sink used when no collector is configured.

use async_trait::async_trait;
use tracing::debug;

use super::service::{LogSink, LogSinkResult};
use crate::domain::log_event::LogEvent;

/// A sink that accepts and discards every event.
///
/// Events are still mirrored to `tracing` by the log service, so nothing is
/// lost locally.
pub struct NullLogSink;

impl NullLogSink {
    /// Creates a new NullLogSink instance.
    pub fn new() -> Self {
        debug!("Using NullLogSink (remote log shipping disabled)");
        Self
    }
}

impl Default for NullLogSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogSink for NullLogSink {
    async fn send(&self, _event: &LogEvent) -> LogSinkResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}
