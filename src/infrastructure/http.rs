//! HTTP client for the probed endpoint.
//!
//! Issues exactly one GET per call with a per-request timeout, then
//! classifies the outcome: network-level failures, non-success status
//! codes, and bodies that fail to parse as JSON each map to their own
//! [`FetchError`] kind. No retries, no caching, no shared state
//! between calls.

use std::time::Instant;

use reqwest::Client;
use serde_json::Value;

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::models::FetchConfig;

/// User-Agent sent with every probe request.
const USER_AGENT: &str = concat!("apiprobe/", env!("CARGO_PKG_VERSION"));

/// Single-shot HTTP client for one endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying HTTP client.
    http: Client,
    /// Target URL and timeout, fixed at construction.
    config: FetchConfig,
}

impl ApiClient {
    /// Create a client for the given request configuration.
    pub fn new(config: FetchConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Fetch the endpoint and parse the body as JSON.
    ///
    /// Emits one log line per call: success with a payload summary, or
    /// failure with the error kind and message.
    pub async fn fetch(&self) -> FetchResult<Value> {
        let started = Instant::now();
        let result = self.fetch_inner().await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(payload) => tracing::info!(
                endpoint = %self.config.url,
                elapsed_ms,
                payload = %summarize(payload),
                "fetch succeeded"
            ),
            Err(err) => tracing::error!(
                endpoint = %self.config.url,
                timeout_ms = self.config.timeout.as_millis() as u64,
                elapsed_ms,
                kind = err.kind(),
                error = %err,
                "fetch failed"
            ),
        }

        result
    }

    async fn fetch_inner(&self) -> FetchResult<Value> {
        let url = reqwest::Url::parse(&self.config.url)
            .map_err(|e| FetchError::Network(format!("invalid URL `{}`: {e}", self.config.url)))?;

        let resp = self
            .http
            .get(url)
            .timeout(self.config.timeout)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Network(format!(
                        "request timed out after {:?}",
                        self.config.timeout
                    ))
                } else {
                    FetchError::Network(format!("request failed: {e}"))
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::http_status(status.as_u16(), &body));
        }

        let body = resp.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Network(format!(
                    "request timed out after {:?}",
                    self.config.timeout
                ))
            } else {
                FetchError::Network(format!("failed to read response: {e}"))
            }
        })?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Render a one-line summary of a JSON payload for logs and human output.
pub fn summarize(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("object with {} keys", map.len()),
        Value::Array(items) => format!("array of {} elements", items.len()),
        Value::String(s) => format!("string ({} chars)", s.chars().count()),
        Value::Number(n) => format!("number {n}"),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Null => "null".to_string(),
    }
}
