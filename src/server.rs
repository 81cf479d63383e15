//! HTTP server initialization and runtime setup.
//!
//! Builds the backend client, the image store and the Axum server.

use crate::config::Config;
use crate::domain::repositories::AssetStore;
use crate::infrastructure::assets::{CloudinaryAssetStore, NullAssetStore};
use crate::infrastructure::http::ApiClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared state from configuration.
///
/// # Errors
///
/// Returns an error if the backend URL is unusable or an HTTP client cannot
/// be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let api = ApiClient::new(&config.api_base_url, config.api_timeout())
        .context("Invalid API_BASE_URL")?;

    let assets: Arc<dyn AssetStore> = match &config.asset_upload {
        Some(upload) => {
            tracing::info!("Image uploads enabled");
            Arc::new(
                CloudinaryAssetStore::new(&upload.url, &upload.preset, config.api_timeout())
                    .context("Failed to set up image uploads")?,
            )
        }
        None => {
            tracing::info!("Image uploads disabled (NullAssetStore)");
            Arc::new(NullAssetStore::new())
        }
    };

    Ok(AppState::new(
        Arc::new(api),
        assets,
        config.page_size,
        config.secure_cookies,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Serves until Ctrl-C (or SIGTERM on Unix), then drains open connections.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
