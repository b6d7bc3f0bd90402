//! Public site configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Origin referral links point at, e.g. `https://campus.example`
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let rest = self
            .origin
            .strip_prefix("https://")
            .or_else(|| self.origin.strip_prefix("http://"))
            .ok_or(ValidationError::InvalidSiteOrigin)?;
        let host = rest.trim_end_matches('/');
        if host.is_empty() || host.contains('/') || host.contains('?') {
            return Err(ValidationError::InvalidSiteOrigin);
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

fn default_origin() -> String {
    "http://localhost:5173".to_string()
}
