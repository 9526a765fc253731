//! Infrastructure layer module
//!
//! External integrations and process-wide concerns:
//! - HTTP client for the probed endpoint
//! - Gemini client
//! - Configuration loading
//! - Logging infrastructure

pub mod config;
pub mod gemini;
pub mod http;
pub mod logging;
