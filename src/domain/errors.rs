//! Error taxonomy for the probe.
//!
//! Every failure a fetch can produce is classified into one of three
//! kinds. The set is closed on purpose: callers match on it, and
//! nothing here is retried or recovered automatically.

use thiserror::Error;

/// Maximum number of body bytes carried inside an [`FetchError::HttpStatus`].
const MAX_BODY_EXCERPT: usize = 512;

/// Classified failure of a single fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The connection could not be established or the timeout elapsed.
    ///
    /// Also covers request-construction failures such as a malformed
    /// URL, which never reach the network at all.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint responded with a status outside the success range.
    #[error("endpoint returned HTTP {code}")]
    HttpStatus {
        /// Numeric status code from the response.
        code: u16,
        /// Truncated excerpt of the response body, for diagnostics.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(String),
}

impl FetchError {
    /// Build an [`FetchError::HttpStatus`] with a bounded body excerpt.
    pub fn http_status(code: u16, body: &str) -> Self {
        let excerpt = if body.len() > MAX_BODY_EXCERPT {
            let mut end = MAX_BODY_EXCERPT;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &body[..end])
        } else {
            body.to_string()
        };
        Self::HttpStatus {
            code,
            body: excerpt,
        }
    }

    /// Short label for the error kind, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::HttpStatus { .. } => "http_status",
            Self::Decode(_) => "decode",
        }
    }
}

/// Result alias used throughout the fetch pipeline.
pub type FetchResult<T> = Result<T, FetchError>;

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // Decode failures surface through `Response::json`; everything
        // else reqwest reports (DNS, connect, timeout, builder) is a
        // network-level failure from the caller's point of view.
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(FetchError::Network("refused".into()).kind(), "network");
        assert_eq!(FetchError::http_status(404, "").kind(), "http_status");
        assert_eq!(FetchError::Decode("eof".into()).kind(), "decode");
    }

    #[test]
    fn test_http_status_display_carries_code() {
        let err = FetchError::http_status(503, "unavailable");
        assert_eq!(err.to_string(), "endpoint returned HTTP 503");
    }

    #[test]
    fn test_http_status_body_is_truncated() {
        let long_body = "x".repeat(2_000);
        let FetchError::HttpStatus { code, body } = FetchError::http_status(500, &long_body) else {
            panic!("expected HttpStatus");
        };
        assert_eq!(code, 500);
        assert!(body.len() < 600);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn test_serde_error_maps_to_decode() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: FetchError = parse_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
