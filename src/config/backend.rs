//! Hosted backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Connection settings for the hosted backend (REST tables and RPC).
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://xyz.backend.example`
    #[serde(default)]
    pub url: String,

    /// Public (anon) API key sent as the `apikey` header
    #[serde(default)]
    pub anon_key: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    /// Both the URL and the key are set.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Rejects malformed values. Missing values are reported by diagnostics.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.url.is_empty() {
            return Ok(());
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ValidationError::InvalidBackendUrl);
        }
        if *environment == Environment::Production && !self.url.starts_with("https://") {
            return Err(ValidationError::BackendMustBeHttps);
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            request_timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
