// ABOUTME: Server binary for the FitTrack fitness tracking API
// ABOUTME: Loads configuration, opens the record store, and serves the HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # FitTrack Server Binary
//!
//! Starts the HTTP API on the configured address and shuts down cleanly on Ctrl+C.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use fittrack_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    routes,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "fittrack-server")]
#[command(about = "FitTrack API - fitness tracking backend")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (`sqlite:path` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url {
        config.database = DatabaseUrl::parse_url(&url);
    }

    // Logging depends on LOG_LEVEL and ENVIRONMENT, so it starts after config
    logging::init_from_config(&config)?;
    info!("Starting FitTrack API");
    info!("{}", config.summary());

    if let DatabaseUrl::SQLite { path } = &config.database {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
    }

    let database = Database::new(&config.database)
        .await
        .context("Failed to open database")?;

    let bind_address = config.bind_address();
    let resources = Arc::new(ServerResources::new(database, config));
    let app = routes::build_router(Arc::clone(&resources));

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!(address = %bind_address, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    resources.database.close().await;
    info!("FitTrack API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
