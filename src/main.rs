//! campus-hub server binary.
//!
//! Usage: `campus-hub [config.yaml]`. Environment variables prefixed with
//! `CAMPUS_HUB__` override the file.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use campus_hub::adapters::http::middleware::AuthState;
use campus_hub::adapters::{
    build_router, http_route_registry, AppState, BackendClient, BackendReferralPorts,
    BackendSubscriptionReader, InMemoryReferralStore, InMemorySubscriptionReader,
    JwtSessionValidator,
};
use campus_hub::application::{FeatureAccessService, NavigationService, PrefetchCache};
use campus_hub::config::{AppConfig, ConfigError, ServerConfig};
use campus_hub::domain::access::FeatureAccessResolver;
use campus_hub::domain::referral::ReferralLinkBuilder;
use campus_hub::ports::{ReferralPortsProvider, SubscriptionReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_file = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load_from(config_file.as_deref())?;
    init_tracing(&config.server);

    config.validate().map_err(ConfigError::from)?;
    config.log_diagnostics();

    let table = config
        .access
        .load_permission_table()
        .map_err(ConfigError::from)?;
    let resolver = FeatureAccessResolver::new(Arc::new(table));

    let (reader, referrals): (Arc<dyn SubscriptionReader>, Arc<dyn ReferralPortsProvider>) =
        if config.backend.is_configured() {
            let client = BackendClient::new(&config.backend)?;
            tracing::info!(url = %config.backend.base_url(), "using hosted backend");
            (
                Arc::new(BackendSubscriptionReader::new(client.clone())),
                Arc::new(BackendReferralPorts::new(client)),
            )
        } else {
            (
                Arc::new(InMemorySubscriptionReader::new()),
                Arc::new(InMemoryReferralStore::new()),
            )
        };

    let validator: AuthState = Arc::new(JwtSessionValidator::from_config(&config.auth));

    let registry = http_route_registry(
        &config.navigation.routes,
        config.navigation.prefetch_timeout(),
    )?;
    let navigation = NavigationService::new(registry, Arc::new(PrefetchCache::new()));

    let state = AppState {
        access: Arc::new(FeatureAccessService::new(resolver, reader)),
        referrals,
        links: ReferralLinkBuilder::new(config.site.origin.clone()),
        navigation,
    };
    let app = build_router(state, validator, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "campus-hub listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("campus-hub stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level. Production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_target(true))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
