//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAMPUS_HUB` prefix and nested values use double underscores as separators.
//! An optional YAML file can supply the same keys; environment variables win.
//!
//! # Example
//!
//! ```no_run
//! use campus_hub::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! config.log_diagnostics();
//! ```

mod access;
mod auth;
mod backend;
mod error;
mod navigation;
mod server;
mod site;

pub use access::AccessConfig;
pub use auth::AuthConfig;
pub use backend::BackendConfig;
pub use error::{ConfigError, ValidationError};
pub use navigation::{NavigationConfig, RouteConfig};
pub use server::{Environment, ServerConfig};
pub use site::SiteConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "CAMPUS_HUB";

/// Root application configuration
///
/// Every section has defaults, so an empty environment still loads. Gaps
/// that make a feature unusable are reported by [`AppConfig::diagnostics`]
/// rather than failing the load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Hosted backend connection
    #[serde(default)]
    pub backend: BackendConfig,

    /// Access-token validation
    #[serde(default)]
    pub auth: AuthConfig,

    /// Public site (referral link origin)
    #[serde(default)]
    pub site: SiteConfig,

    /// Permission table source
    #[serde(default)]
    pub access: AccessConfig,

    /// Route bundles to prefetch
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// A non-fatal configuration gap found at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    pub section: &'static str,
    pub message: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAMPUS_HUB` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CAMPUS_HUB__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CAMPUS_HUB__BACKEND__URL=...` -> `backend.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`AppConfig::load`], layering environment variables over `file`.
    ///
    /// The file format is taken from its extension (`.yaml`, `.toml`, ...).
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configured value is malformed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.backend.validate(&self.server.environment)?;
        self.auth.validate(&self.server.environment)?;
        self.site.validate()?;
        self.navigation.validate()?;
        Ok(())
    }

    /// Gaps that leave a feature unusable without stopping startup.
    pub fn diagnostics(&self) -> Vec<ConfigDiagnostic> {
        let mut found = Vec::new();
        let mut note = |section, message: &str| {
            found.push(ConfigDiagnostic {
                section,
                message: message.to_string(),
            })
        };

        if self.backend.url.is_empty() {
            note("backend", "backend URL is not set; using in-memory adapters");
        }
        if self.backend.anon_key.is_empty() {
            note("backend", "backend API key is not set; using in-memory adapters");
        }
        if !self.auth.is_configured() {
            note("auth", "JWT secret is not set; authenticated routes will reject every request");
        }
        if self.is_production() && self.server.cors_origins_list().is_empty() {
            note("server", "no CORS origins configured in production");
        }
        if self.is_production() && self.site.origin.starts_with("http://localhost") {
            note("site", "site origin points at localhost; referral links will not work");
        }

        found
    }

    /// Emits every diagnostic as a warning under a `config_diagnostics` span.
    pub fn log_diagnostics(&self) {
        let span = tracing::info_span!("config_diagnostics");
        let _entered = span.enter();
        for diagnostic in self.diagnostics() {
            tracing::warn!(section = diagnostic.section, "{}", diagnostic.message);
        }
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "CAMPUS_HUB__BACKEND__URL",
        "CAMPUS_HUB__BACKEND__ANON_KEY",
        "CAMPUS_HUB__AUTH__JWT_SECRET",
        "CAMPUS_HUB__SITE__ORIGIN",
        "CAMPUS_HUB__SERVER__PORT",
        "CAMPUS_HUB__SERVER__ENVIRONMENT",
    ];

    fn set_minimal_env() {
        env::set_var("CAMPUS_HUB__BACKEND__URL", "https://db.campus.example");
        env::set_var("CAMPUS_HUB__BACKEND__ANON_KEY", "anon-key");
        env::set_var("CAMPUS_HUB__AUTH__JWT_SECRET", "dev-secret");
        env::set_var("CAMPUS_HUB__SITE__ORIGIN", "https://campus.example");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.backend.url, "https://db.campus.example");
        assert_eq!(config.site.origin, "https://campus.example");
        assert!(config.validate().is_ok());
        assert!(config.diagnostics().is_empty());
    }

    #[test]
    fn test_empty_environment_loads_with_diagnostics() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
        let sections: Vec<_> = config.diagnostics().iter().map(|d| d.section).collect();
        assert!(sections.contains(&"backend"));
        assert!(sections.contains(&"auth"));
    }

    #[test]
    fn test_production_flags_localhost_origin() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CAMPUS_HUB__SERVER__ENVIRONMENT", "production");
        env::set_var("CAMPUS_HUB__SITE__ORIGIN", "http://localhost:5173");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(config.diagnostics().iter().any(|d| d.section == "site"));
    }

    #[test]
    fn test_yaml_file_with_env_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus-hub.yaml");
        std::fs::write(
            &path,
            "server:\n  port: 9090\nsite:\n  origin: https://file.campus.example\naccess:\n  permissions_path: /etc/campus-hub/permissions.yaml\nnavigation:\n  routes:\n    - path: /Dashboard\n      bundle_url: https://cdn.campus.example/Dashboard.js\n",
        )
        .unwrap();

        env::set_var("CAMPUS_HUB__SERVER__PORT", "3000");
        let result = AppConfig::load_from(Some(&path));
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.origin, "https://file.campus.example");
        assert_eq!(
            config.access.permissions_path.as_deref(),
            Some(Path::new("/etc/campus-hub/permissions.yaml"))
        );
        // Mixed-case paths survive loading unchanged.
        assert_eq!(
            config.navigation.routes,
            vec![RouteConfig {
                path: "/Dashboard".to_string(),
                bundle_url: "https://cdn.campus.example/Dashboard.js".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = AppConfig::load_from(Some(Path::new("/nonexistent/campus-hub.yaml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
