//! Litscout API configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Longest request timeout the client accepts (10 minutes).
const MAX_TIMEOUT_SECS: u64 = 600;

fn default_timeout_secs() -> u64 {
    60
}

/// Connection settings for the Litscout API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service, e.g. `https://api.litscout.example`.
    pub base_url: String,

    /// Request timeout in seconds (default 60). Generation calls are slow;
    /// don't set this aggressively low.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// The timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates URL shape and timeout bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("api.base_url"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidApiUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}
