//! HTTP log collector sink.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::service::{LogSink, LogSinkError, LogSinkResult};
use crate::domain::log_event::LogEvent;

/// Upper bound for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Ships events to a remote collector with `POST <endpoint>` and a JSON body.
///
/// Any non-2xx answer counts as a failed delivery so the worker can retry it.
pub struct HttpLogSink {
    client: Client,
    endpoint: Url,
}

impl HttpLogSink {
    /// Builds a sink posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`LogSinkError::Delivery`] if the HTTP client cannot be built.
    pub fn new(endpoint: Url) -> LogSinkResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LogSinkError::Delivery(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LogSink for HttpLogSink {
    async fn send(&self, event: &LogEvent) -> LogSinkResult<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(event)
            .send()
            .await
            .map_err(|e| LogSinkError::Delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogSinkError::Rejected(status.as_u16()));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
