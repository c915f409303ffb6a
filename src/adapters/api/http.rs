//! Shared HTTP plumbing for the Litscout API adapters.
//!
//! Both the gateway and the store talk to the same service, so the client
//! configuration, transport-error mapping, and status classification live
//! here. Classification is pure and tested without a network.

use std::time::Duration;

use reqwest::Client;

use super::dto::ErrorBody;
use crate::ports::ApiError;

/// Configuration for the Litscout API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the API (e.g. `https://api.litscout.example`).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ApiClientConfig {
    /// Creates a configuration with the default 60s timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the reqwest client for this configuration.
    pub(crate) fn build_client(&self) -> Client {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to create HTTP client")
    }

    /// Joins a path onto the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Maps a reqwest transport failure into the shared taxonomy.
pub(crate) fn transport_error(err: reqwest::Error, timeout: Duration) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout {
            timeout_secs: timeout.as_secs() as u32,
        }
    } else if err.is_connect() {
        ApiError::network(format!("connection failed: {}", err))
    } else {
        ApiError::network(err.to_string())
    }
}

/// Classifies a non-2xx response.
///
/// 401 is always auth expiry. Any other status with a parseable
/// `{error: string}` payload is a domain failure carrying the server's
/// message; everything else is a transport-level failure.
pub(crate) fn classify_error(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::AuthExpired;
    }
    if let Ok(payload) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = payload.error {
            return ApiError::domain(message);
        }
    }
    ApiError::network(format!("unexpected status {}: {}", status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_doubling_slashes() {
        let config = ApiClientConfig::new("https://api.example.org/");
        assert_eq!(
            config.url("/generate_report"),
            "https://api.example.org/generate_report"
        );

        let config = ApiClientConfig::new("https://api.example.org");
        assert_eq!(
            config.url("/generate_report"),
            "https://api.example.org/generate_report"
        );
    }

    #[test]
    fn config_builder_sets_timeout() {
        let config = ApiClientConfig::new("https://api.example.org")
            .with_timeout(Duration::from_secs(10));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn status_401_is_auth_expiry_regardless_of_body() {
        assert!(matches!(classify_error(401, ""), ApiError::AuthExpired));
        assert!(matches!(
            classify_error(401, r#"{"error":"Unauthorized"}"#),
            ApiError::AuthExpired
        ));
    }

    #[test]
    fn structured_error_payload_becomes_domain_error() {
        let err = classify_error(422, r#"{"error":"Model generation failed"}"#);
        let ApiError::Domain(message) = err else {
            panic!("expected domain error, got {:?}", err);
        };
        assert_eq!(message, "Model generation failed");
    }

    #[test]
    fn unparseable_body_becomes_network_error() {
        assert!(matches!(
            classify_error(500, "<html>Internal Server Error</html>"),
            ApiError::Network(_)
        ));
        assert!(matches!(classify_error(502, ""), ApiError::Network(_)));
    }

    #[test]
    fn error_payload_without_error_field_is_network_error() {
        assert!(matches!(
            classify_error(500, r#"{"detail":"boom"}"#),
            ApiError::Network(_)
        ));
    }
}
