//! Gemini client.
//!
//! Makes direct HTTP calls to the Google Generative Language API. The
//! call pipeline is the same request/validate/decode shape as the
//! probe fetch, so failures reuse the [`FetchError`] taxonomy.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::models::GeminiConfig;

/// HTTP client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    /// The underlying HTTP client.
    http: Client,
    /// Resolved API key.
    api_key: String,
    /// Client configuration.
    config: GeminiConfig,
}

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

/// A content block: a list of parts.
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

/// A single text part.
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Response body for `generateContent`, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    /// Create a client, resolving the API key from config or the
    /// `GENAI_API_KEY` environment variable.
    ///
    /// Returns `Err` if no key is available, so a misconfigured client
    /// fails before any network call.
    pub fn new(config: GeminiConfig) -> Result<Self, String> {
        let api_key = config
            .get_api_key()
            .ok_or_else(|| "GENAI_API_KEY environment variable is not set".to_string())?;
        Ok(Self {
            http: Client::new(),
            api_key,
            config,
        })
    }

    /// Send a prompt and return the first candidate's text.
    pub async fn generate(&self, prompt: &str) -> FetchResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::info!(
            model = %self.config.model,
            prompt_chars = prompt.chars().count(),
            "sending prompt to Gemini"
        );

        let resp = self
            .http
            .post(&url)
            .timeout(Duration::from_secs_f64(self.config.timeout_secs))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Network(format!(
                        "Gemini request timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else {
                    FetchError::Network(format!("Gemini request failed: {e}"))
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            let err = FetchError::http_status(status.as_u16(), &body_text);
            tracing::error!(model = %self.config.model, kind = err.kind(), error = %err, "Gemini call failed");
            return Err(err);
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| FetchError::Decode("empty response from Gemini".to_string()))?;

        tracing::info!(
            model = %self.config.model,
            response_chars = text.chars().count(),
            "response received from Gemini"
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_api_key() {
        temp_env::with_var("GENAI_API_KEY", None::<&str>, || {
            let result = GeminiClient::new(GeminiConfig::default());
            assert!(result.is_err());
            assert!(result.unwrap_err().contains("not set"));
        });
    }

    #[test]
    fn test_client_with_explicit_key() {
        let config = GeminiConfig {
            api_key: Some("test-key".to_string()),
            ..GeminiConfig::default()
        };
        let client = GeminiClient::new(config).expect("client");
        assert_eq!(client.api_key, "test-key");
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }
}
