// ABOUTME: Server binary for the trainplan weekly training-plan API
// ABOUTME: Loads configuration, opens the workout store, and serves HTTP until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Trainplan Server Binary

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use trainplan_server::{
    auth::{generate_jwt_secret, AuthManager},
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    routes::build_router,
};

/// Command-line overrides for the server configuration
#[derive(Parser)]
#[command(name = "trainplan-server")]
#[command(about = "Trainplan - weekly training-plan generator API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
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
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url);
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let connection_string = config.database.url.to_connection_string();
    let database = if config.database.auto_migrate {
        Database::new(&connection_string).await
    } else {
        warn!("AUTO_MIGRATE=false; expecting the schema to exist already");
        Database::connect(&connection_string).await
    }
    .context("Failed to open database")?;
    info!("Database URL: {}", config.database.url);

    let secret = if let Some(secret) = config.auth.jwt_secret.as_deref() {
        secret.as_bytes().to_vec()
    } else {
        warn!("JWT_SECRET not set; using an ephemeral secret, issued tokens die with this process");
        generate_jwt_secret().to_vec()
    };
    let auth_manager = AuthManager::new(secret, config.auth.jwt_expiry_hours);

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, auth_manager, Arc::new(config)));
    let app = build_router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    display_available_endpoints(http_port);
    info!("Server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {e}; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("   Generate Week:     POST http://{host}:{port}/api/plans/weekly");
    info!("   Read Week:         GET  http://{host}:{port}/api/plans/weekly?user_id=&start_date=&days=");
    info!("   Store Goal:        PUT  http://{host}:{port}/api/profile/goal");
    info!("   Read Goal:         GET  http://{host}:{port}/api/profile/goal?user_id=");
    info!("=== End of Endpoint List ===");
}
