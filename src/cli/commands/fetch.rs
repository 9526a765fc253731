//! Implementation of the `apiprobe fetch` command.

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::cli::output::{truncate, CommandOutput};
use crate::domain::models::{Config, FetchConfig};
use crate::infrastructure::http::{summarize, ApiClient};

/// Byte cap on the payload shown in human output. `--json` always
/// prints the payload in full.
const MAX_HUMAN_PAYLOAD: usize = 4096;

#[derive(Args, Debug, Default)]
pub struct FetchArgs {
    /// Endpoint URL (defaults to the configured endpoint)
    pub url: Option<String>,

    /// Request timeout in seconds (fractional values allowed)
    #[arg(short, long)]
    pub timeout: Option<f64>,
}

#[derive(Debug, serde::Serialize)]
pub struct FetchOutput {
    pub endpoint: String,
    pub summary: String,
    pub payload: serde_json::Value,
}

impl CommandOutput for FetchOutput {
    fn to_human(&self) -> String {
        let pretty = serde_json::to_string_pretty(&self.payload).unwrap_or_default();
        format!(
            "Fetched {} ({})\n{}",
            self.endpoint,
            self.summary,
            truncate(&pretty, MAX_HUMAN_PAYLOAD)
        )
    }
}

pub async fn execute(args: FetchArgs, config: &Config, json_mode: bool) -> Result<()> {
    let url = args.url.unwrap_or_else(|| config.endpoint.clone());
    let timeout_secs = args.timeout.unwrap_or(config.timeout_secs);
    if !timeout_secs.is_finite() || timeout_secs <= 0.0 {
        bail!("timeout must be a positive number of seconds, got {timeout_secs}");
    }

    let client = ApiClient::new(FetchConfig::new(url.clone(), timeout_secs));
    let payload = client
        .fetch()
        .await
        .with_context(|| format!("fetching {url} (timeout {timeout_secs}s)"))?;

    FetchOutput {
        summary: summarize(&payload),
        endpoint: url,
        payload,
    }
    .print(json_mode);
    Ok(())
}
