//! Listener, logging and CORS settings for the HTTP server.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest request timeout accepted.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,

    pub request_timeout_secs: u64,

    /// Comma-separated list of allowed origins, or `*`.
    pub cors_origins: Option<String>,
}

/// Deployment environment. Production tightens several checks.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,campus_hub=debug,tower_http=info".into(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Trimmed, non-empty origins from `cors_origins`.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let server = ServerConfig::default();
        assert_eq!(server.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert!(!server.is_production());
        assert_eq!(server.request_timeout(), Duration::from_secs(30));
        assert!(server.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let server: ServerConfig =
            serde_yaml::from_str("port: 9000\nenvironment: production\n").unwrap();
        assert_eq!(server.port, 9000);
        assert!(server.is_production());
        assert_eq!(server.host, "0.0.0.0");
    }

    #[test]
    fn host_that_does_not_parse_fails_validation() {
        let server = ServerConfig {
            host: "campus hub".into(),
            ..Default::default()
        };
        assert!(matches!(
            server.validate(),
            Err(ValidationError::InvalidHost(_))
        ));
    }

    #[test]
    fn cors_list_skips_blank_entries() {
        let server = ServerConfig {
            cors_origins: Some(" http://localhost:5173 ,,https://campus.example, ".into()),
            ..Default::default()
        };
        assert_eq!(
            server.cors_origins_list(),
            vec!["http://localhost:5173", "https://campus.example"]
        );
    }

    #[test]
    fn zero_port_and_oversized_timeout_are_rejected() {
        let no_port = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(no_port.validate(), Err(ValidationError::InvalidPort)));

        let slow = ServerConfig {
            request_timeout_secs: MAX_REQUEST_TIMEOUT_SECS + 1,
            ..Default::default()
        };
        assert!(matches!(slow.validate(), Err(ValidationError::InvalidTimeout)));
    }
}
