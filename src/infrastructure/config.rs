//! Configuration loading with hierarchical merging.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid timeout: {0}. Must be a positive number of seconds")]
    InvalidTimeout(f64),

    #[error("Invalid endpoint `{0}`: must be a valid http(s) URL")]
    InvalidEndpoint(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid Gemini model: model name cannot be empty")]
    EmptyGeminiModel,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. apiprobe.yaml in the working directory (optional)
    /// 3. Environment variables (`APIPROBE_*` prefix, `__` nesting)
    pub fn load() -> Result<Config> {
        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("apiprobe.yaml"))
            .merge(Env::prefixed("APIPROBE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// `GENAI_MODEL_NAME` is honored on every load path, for
    /// compatibility with other Gemini tooling that already sets it.
    fn apply_env_overrides(config: &mut Config) {
        if let Ok(model) = std::env::var("GENAI_MODEL_NAME") {
            if !model.is_empty() {
                config.gemini.model = model;
            }
        }
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if !config.timeout_secs.is_finite() || config.timeout_secs <= 0.0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs));
        }

        if !config.gemini.timeout_secs.is_finite() || config.gemini.timeout_secs <= 0.0 {
            return Err(ConfigError::InvalidTimeout(config.gemini.timeout_secs));
        }

        match reqwest::Url::parse(&config.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidEndpoint(config.endpoint.clone())),
        }

        let level = config.logging.level.to_lowercase();
        if !matches!(
            level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config.gemini.model.trim().is_empty() {
            return Err(ConfigError::EmptyGeminiModel);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(ConfigLoader::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_secs: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = Config {
            endpoint: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let config = Config {
            logging: crate::domain::models::LogConfig {
                level: "verbose".to_string(),
                ..Default::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_load_from_file_merges_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "endpoint: \"https://example.com/api\"").expect("write");
        writeln!(file, "timeout_secs: 2.5").expect("write");

        let config = ConfigLoader::load_from_file(file.path()).expect("load");
        assert_eq!(config.endpoint, "https://example.com/api");
        assert!((config.timeout_secs - 2.5).abs() < f64::EPSILON);
        // Untouched fields keep their defaults.
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_overrides_defaults() {
        temp_env::with_vars(
            [
                ("APIPROBE_ENDPOINT", Some("http://localhost:8080/json")),
                ("APIPROBE_TIMEOUT_SECS", Some("1.5")),
                ("GENAI_MODEL_NAME", None),
            ],
            || {
                let config = ConfigLoader::load().expect("load");
                assert_eq!(config.endpoint, "http://localhost:8080/json");
                assert!((config.timeout_secs - 1.5).abs() < f64::EPSILON);
            },
        );
    }

    #[test]
    fn test_genai_model_name_env_is_honored() {
        temp_env::with_var("GENAI_MODEL_NAME", Some("gemini-2.5-pro"), || {
            let config = ConfigLoader::load().expect("load");
            assert_eq!(config.gemini.model, "gemini-2.5-pro");
        });
    }

    #[test]
    fn test_genai_model_name_env_applies_to_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "endpoint: \"https://example.com/api\"").expect("write");

        temp_env::with_var("GENAI_MODEL_NAME", Some("gemini-2.5-pro"), || {
            let config = ConfigLoader::load_from_file(file.path()).expect("load");
            assert_eq!(config.gemini.model, "gemini-2.5-pro");
        });
    }
}
