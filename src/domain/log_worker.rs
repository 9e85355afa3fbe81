use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::log_event::LogEvent;
use crate::infrastructure::log_sink::LogSink;

/// Retries per event after the first failed attempt.
const MAX_RETRIES: usize = 3;

/// Drains the log queue and ships every event to `sink`.
///
/// Delivery is best-effort: an event that still fails after the retries is
/// dropped with a `warn` trace. The worker exits once every sender is gone.
pub async fn run_log_worker(mut rx: mpsc::Receiver<LogEvent>, sink: Arc<dyn LogSink>) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(25)
            .max_delay(Duration::from_secs(1))
            .map(jitter)
            .take(MAX_RETRIES);

        let result = Retry::spawn(strategy, || {
            let sink = sink.clone();
            let event = event.clone();
            async move { sink.send(&event).await }
        })
        .await;

        if let Err(e) = result {
            tracing::warn!(sink = sink.name(), error = %e, "Dropping log event");
        }
    }

    tracing::debug!("Log worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::log_event::LogLevel;
    use crate::infrastructure::log_sink::{LogSinkError, LogSinkResult};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LogSink for RecordingSink {
        async fn send(&self, event: &LogEvent) -> LogSinkResult<()> {
            self.events.lock().unwrap().push(event.message.clone());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    struct FailingSink {
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl LogSink for FailingSink {
        async fn send(&self, _event: &LogEvent) -> LogSinkResult<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(LogSinkError::Delivery("collector unavailable".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_worker_ships_events_in_order() {
        let sink = Arc::new(RecordingSink::default());
        let (tx, rx) = mpsc::channel(10);

        for i in 0..3 {
            tx.send(LogEvent::new("test", LogLevel::Info, "pkg", format!("event {i}")))
                .await
                .unwrap();
        }
        drop(tx);

        run_log_worker(rx, sink.clone()).await;

        let events = sink.events.lock().unwrap();
        assert_eq!(*events, vec!["event 0", "event 1", "event 2"]);
    }

    #[tokio::test]
    async fn test_worker_retries_then_drops() {
        let sink = Arc::new(FailingSink {
            attempts: AtomicUsize::new(0),
        });
        let (tx, rx) = mpsc::channel(10);

        tx.send(LogEvent::new("test", LogLevel::Error, "pkg", "boom"))
            .await
            .unwrap();
        drop(tx);

        run_log_worker(rx, sink.clone()).await;

        assert_eq!(sink.attempts.load(Ordering::SeqCst), MAX_RETRIES + 1);
    }
}
