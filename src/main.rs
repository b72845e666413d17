//! Money Guardian - Main Application Entry Point
//!
//! A small REST API server for bank accounts: create, list, fetch and delete accounts, plus a
//! transfer endpoint that acknowledges requests without moving funds.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries), behind the `Storage` trait
//! - **Format**: JSON requests/responses; every error is a 400 with `{"error": ...}`
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Connect to the database (fatal if unreachable)
//! 3. Create the account table if missing
//! 4. Build HTTP router
//! 5. Serve on the configured port until Ctrl-C / SIGTERM

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod storage;

use anyhow::Context;
use std::sync::Arc;
use storage::{DynStorage, PostgresStorage};
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env().context("load configuration")?;
    tracing::info!(?config, "Configuration loaded");

    let store = PostgresStorage::connect(&config)
        .await
        .context("connect to database")?;
    tracing::info!("Database pool created");

    store.init().await.context("initialize account table")?;
    tracing::info!("Database schema ready");

    let app = handlers::router(Arc::new(store) as DynStorage);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("run server")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "cannot install SIGTERM handler");
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
