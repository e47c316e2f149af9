//! Veracity Server
//!
//! HTTP front end for image analysis. Accepts a multipart upload, runs the
//! provenance and capture-metadata probes, and returns the scored report.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use veracity_probe::{Analyzer, ToolLocation};

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the stderr log subscriber (`RUST_LOG`, default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Start the HTTP server
///
/// Resolves the provenance tool once, builds the shared analyzer,
/// and starts the axum server.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    info!("Starting Veracity server");
    info!("Bind address: {}", config.bind_addr());
    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let location = ToolLocation::resolve(&config.provenance_tool);

    let state = AppState {
        analyzer: Arc::new(Analyzer::new(location)),
        max_upload_bytes: config.max_upload_bytes,
    };

    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
