//! Domain layer for the probe.
//!
//! This module contains the error taxonomy and configuration models.

pub mod errors;
pub mod models;

// Re-export for convenient access
pub use errors::{FetchError, FetchResult};
pub use models::{Config, FetchConfig, GeminiConfig, LogConfig, LogFormat};
