//! Remote event logging.
//!
//! A thin client over a generic backend-as-a-service REST surface: insert
//! rows into a named event table, or invoke a named remote function.
//! Every call is fire-and-forget — the caller spawns the request and moves
//! on; failures are logged and the error detail is discarded. Transient
//! server errors are retried with exponential backoff before giving up.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use gaia_data::Notice;

const INITIAL_BACKOFF_MS: u64 = 1000;

/// Whether an HTTP status is worth retrying.
#[must_use]
pub fn is_transient(status: u16) -> bool {
    status == 429 || (500..=599).contains(&status)
}

/// Destination for telemetry rows.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn insert_row(&self, table: &str, row: serde_json::Value) -> Result<()>;
    async fn invoke_function(&self, name: &str, payload: serde_json::Value) -> Result<String>;
}

/// REST implementation against a backend-as-a-service endpoint.
pub struct RestSink {
    client: reqwest::Client,
    endpoint: String,
    request_timeout: Duration,
    max_retries: u32,
}

impl RestSink {
    #[must_use]
    pub fn new(endpoint: String, request_timeout: Duration, max_retries: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            request_timeout,
            max_retries: max_retries.max(1),
        }
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String> {
        let mut last_error: Option<anyhow::Error> = None;

        for attempt in 0..self.max_retries {
            let response = self
                .client
                .post(url)
                .timeout(self.request_timeout)
                .json(body)
                .send()
                .await;

            match response {
                Ok(resp) => {
                    if resp.status().is_success() {
                        return Ok(resp.text().await.unwrap_or_default());
                    }

                    let status = resp.status();
                    if !is_transient(status.as_u16()) || attempt == self.max_retries - 1 {
                        return Err(anyhow::anyhow!("server returned error: {}", status));
                    }
                    last_error = Some(anyhow::anyhow!("server returned error: {}", status));
                }
                Err(e) => {
                    let retryable = e.is_timeout() || e.is_connect();
                    if !retryable || attempt == self.max_retries - 1 {
                        return Err(anyhow::anyhow!("request failed: {}", e));
                    }
                    last_error = Some(anyhow::anyhow!("request failed: {}", e));
                }
            }

            if attempt < self.max_retries - 1 {
                let backoff_ms = INITIAL_BACKOFF_MS * 2_u64.pow(attempt);
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("unknown telemetry error")))
    }
}

#[async_trait]
impl EventSink for RestSink {
    async fn insert_row(&self, table: &str, row: serde_json::Value) -> Result<()> {
        let url = format!("{}/rest/v1/{}", self.endpoint, table);
        self.post_json(&url, &row).await?;
        Ok(())
    }

    async fn invoke_function(&self, name: &str, payload: serde_json::Value) -> Result<String> {
        let url = format!("{}/functions/v1/{}", self.endpoint, name);
        self.post_json(&url, &payload).await
    }
}

/// Called with the operation label and issuing tick when a fire-and-forget
/// request ultimately fails. The error detail stays behind in the logs.
pub type FailureHandler = Arc<dyn Fn(&str, u64) + Send + Sync>;

/// Fire-and-forget telemetry frontend.
///
/// A disabled client swallows everything; an enabled one spawns each
/// request, logs failures, and reports them through the failure handler
/// as a generic notification with the detail discarded.
#[derive(Clone)]
pub struct TelemetryClient {
    sink: Option<Arc<dyn EventSink>>,
    table: String,
    on_failure: Option<FailureHandler>,
}

impl TelemetryClient {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            sink: None,
            table: String::new(),
            on_failure: None,
        }
    }

    #[must_use]
    pub fn new(sink: Arc<dyn EventSink>, table: String) -> Self {
        Self {
            sink: Some(sink),
            table,
            on_failure: None,
        }
    }

    /// Registers the generic-failure surface.
    #[must_use]
    pub fn with_failure_handler(mut self, handler: FailureHandler) -> Self {
        self.on_failure = Some(handler);
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    fn spawn_insert(&self, operation: &'static str, tick: u64, row: serde_json::Value) {
        let Some(sink) = self.sink.clone() else {
            return;
        };
        let table = self.table.clone();
        let on_failure = self.on_failure.clone();
        tokio::spawn(async move {
            if let Err(e) = sink.insert_row(&table, row).await {
                tracing::warn!(operation, error = %e, "telemetry insert failed");
                if let Some(handler) = on_failure {
                    handler(operation, tick);
                }
            }
        });
    }

    /// Queues a notice row. Never blocks, never fails the caller.
    pub fn record_notice(&self, notice: &Notice) {
        if self.sink.is_none() {
            return;
        }
        let row = match serde_json::to_value(notice) {
            Ok(payload) => serde_json::json!({
                "event_type": "notice",
                "payload": payload,
                "created_at": chrono::Utc::now().to_rfc3339(),
            }),
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize notice for telemetry");
                return;
            }
        };
        self.spawn_insert("event insert", notice.tick(), row);
    }

    /// Records that an external link was handed to the user.
    pub fn record_link_opened(&self, url: &str, tick: u64) {
        if self.sink.is_none() {
            return;
        }
        let row = serde_json::json!({
            "event_type": "link_opened",
            "payload": { "url": url },
            "created_at": chrono::Utc::now().to_rfc3339(),
        });
        self.spawn_insert("link log", tick, row);
    }

    /// Invokes a named remote function, discarding the response.
    pub fn invoke(&self, name: &str, payload: serde_json::Value, tick: u64) {
        let Some(sink) = self.sink.clone() else {
            return;
        };
        let name = name.to_string();
        let on_failure = self.on_failure.clone();
        tokio::spawn(async move {
            if let Err(e) = sink.invoke_function(&name, payload).await {
                tracing::warn!(function = %name, error = %e, "remote function failed");
                if let Some(handler) = on_failure {
                    handler("remote function", tick);
                }
            }
        });
    }
}
