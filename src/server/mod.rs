// src/server/mod.rs
//! Registry HTTP server
//!
//! This module provides an HTTP server that:
//! - Answers package search queries against the in-memory snapshot
//! - Lists categories of the newest packages
//! - Serves everything else straight from the public directory
//! - Optionally reloads manifests from disk on an interval

pub mod config;
mod handlers;
mod routes;

pub use config::RegistryConfig;
pub use routes::create_router;

use crate::store::{DirectorySource, PackageStore};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Directory served for static requests; manifests under `package/`
    pub public_dir: PathBuf,
    /// Manifest reload interval (None = load once at startup)
    pub reload_interval: Option<Duration>,
    /// Cache-Control max-age for /search
    pub search_cache: Duration,
    /// Cache-Control max-age for /categories
    pub categories_cache: Duration,
    /// Cache-Control max-age for static files
    pub catch_all_cache: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            public_dir: PathBuf::from("./public"),
            reload_interval: None,
            search_cache: Duration::from_secs(60 * 60),
            categories_cache: Duration::from_secs(60 * 60),
            catch_all_cache: Duration::from_secs(24 * 60 * 60),
        }
    }
}

/// Shared server state
///
/// Immutable apart from the store's snapshot handle, so handlers share it
/// without an outer lock.
pub struct ServerState {
    pub config: ServerConfig,
    pub store: PackageStore,
}

impl ServerState {
    pub fn new(config: ServerConfig, store: PackageStore) -> Self {
        Self { config, store }
    }

    /// Build state backed by the manifests under the configured public directory
    pub fn open(config: ServerConfig) -> Result<Self> {
        let source = DirectorySource::from_public_dir(&config.public_dir);
        let store = PackageStore::open(source).with_context(|| {
            format!("Failed to load packages from {}", config.public_dir.display())
        })?;
        Ok(Self::new(config, store))
    }
}

/// Start the registry server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting package registry on {}", config.bind_addr);
    tracing::info!("Public directory: {:?}", config.public_dir);

    let state = Arc::new(ServerState::open(config.clone())?);

    if let Some(interval) = config.reload_interval {
        tracing::info!("Manifest reload: every {:?}", interval);
        let reload_state = state.clone();
        tokio::spawn(async move {
            run_reload_loop(reload_state, interval).await;
        });
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Package registry started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Package registry stopped");
    Ok(())
}

/// Periodically reload manifests and swap in the new snapshot
async fn run_reload_loop(state: Arc<ServerState>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately; the store is already loaded
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let reload_state = state.clone();
        let result = tokio::task::spawn_blocking(move || reload_state.store.refresh()).await;

        match result {
            Ok(Ok(count)) => tracing::debug!("Reloaded {} package manifests", count),
            Ok(Err(e)) => tracing::error!(
                "Manifest reload from {} failed, keeping previous snapshot: {}",
                state.store.describe(),
                e
            ),
            Err(e) => tracing::error!("Manifest reload task panicked: {}", e),
        }
    }
}

/// Resolve when the process receives Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
