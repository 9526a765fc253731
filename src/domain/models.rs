//! Configuration models.
//!
//! All configuration is explicit and serde-derived. Nothing in the
//! domain reads environment variables directly; the loader in
//! `infrastructure::config` merges defaults, file, and environment
//! into these structs once at startup.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default endpoint probed when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint probed by the default `fetch` command.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds. Fractional values are allowed.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LogConfig,

    /// Gemini client configuration.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            logging: LogConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for the stderr layer.
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Directory for log files. When unset, logs go to stderr only.
    pub log_dir: Option<PathBuf>,

    /// Enable the stderr layer.
    #[serde(default = "default_true")]
    pub enable_stderr: bool,
}

/// Output format of the stderr log layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            log_dir: None,
            enable_stderr: true,
        }
    }
}

/// Configuration for the Gemini client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key. Falls back to the `GENAI_API_KEY` environment variable.
    pub api_key: Option<String>,

    /// Model to prompt. The `GENAI_MODEL_NAME` environment variable
    /// overrides this via the config loader.
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// API base URL.
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_gemini_timeout_secs")]
    pub timeout_secs: f64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            timeout_secs: default_gemini_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Get the API key from config or the environment.
    pub fn get_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("GENAI_API_KEY").ok().filter(|k| !k.is_empty()))
    }
}

/// Per-call request configuration: one target, one timeout.
///
/// Immutable for the lifetime of the call.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Target URL for the GET request.
    pub url: String,
    /// Maximum wait before the call is abandoned as a network failure.
    pub timeout: Duration,
}

impl FetchConfig {
    /// Build a fetch config from a URL and a timeout in seconds.
    pub fn new(url: impl Into<String>, timeout_secs: f64) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs_f64(timeout_secs),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> f64 {
    5.0
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> LogFormat {
    LogFormat::Pretty
}

fn default_true() -> bool {
    true
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_timeout_secs() -> f64 {
    60.0
}
