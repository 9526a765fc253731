//! Apiprobe - JSON endpoint probe
//!
//! Apiprobe issues a single HTTP GET to a configured REST endpoint,
//! applies a fixed timeout, classifies the outcome, and prints the
//! parsed JSON payload. It ships as a library plus a thin CLI binary
//! so the fetch pipeline is testable in isolation.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): error taxonomy and configuration models
//! - **Infrastructure Layer** (`infrastructure`): HTTP clients, config
//!   loading, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use apiprobe::{ApiClient, FetchConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiClient::new(FetchConfig::new("https://api.github.com", 5.0));
//!     let payload = client.fetch().await?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::errors::{FetchError, FetchResult};
pub use domain::models::{Config, FetchConfig, GeminiConfig, LogConfig, LogFormat};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::gemini::GeminiClient;
pub use infrastructure::http::{summarize, ApiClient};
pub use infrastructure::logging::Logger;
