//! docsift Gateway
//!
//! HTTP front end for the document processor and analyzer. Accepts
//! function-style events, replies with the processing and analysis records,
//! and serves the shared history logs.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::{ConfigError, GatewayConfig};
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Gateway error
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application router from configuration
pub fn build_app(config: &GatewayConfig) -> Result<axum::Router, GatewayError> {
    let state = AppState::from_config(config)?;
    Ok(create_router(state))
}

/// Start the Gateway HTTP server
///
/// Validates configuration, sets up shared history, and starts the axum
/// server.
pub async fn start_server(config: GatewayConfig) -> Result<(), GatewayError> {
    // RUST_LOG overrides the default filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    info!("Starting docsift Gateway");
    info!("Bind address: {}", config.bind_addr());
    info!("History capacity: {}", config.history_capacity);

    let app = build_app(&config)?;

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Gateway listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| GatewayError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_app_rejects_invalid_config() {
        let mut config = GatewayConfig::default_local_config();
        config.analyzer.top_keywords_limit = 0;

        assert!(matches!(build_app(&config), Err(GatewayError::Config(_))));
    }
}
