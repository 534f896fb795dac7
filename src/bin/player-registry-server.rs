// ABOUTME: Server binary for the player registry REST API
// ABOUTME: Loads configuration, initializes logging and the store, then serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Player Registry Server Binary
//!
//! Starts the REST API: configuration from the environment (with CLI
//! overrides), structured logging, the SQLite store (running its
//! migration), and the axum server with graceful shutdown.

use anyhow::Result;
use clap::Parser;
use player_registry::{
    config::environment::ServerConfig,
    constants::routes,
    logging,
    server::{self, ServerResources},
    store::SqliteStore,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "player-registry-server")]
#[command(about = "Player Registry - REST API for game-character records")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. sqlite:./data/players.db)
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
    if let Some(database_url) = &args.database_url {
        config.database.url =
            player_registry::config::environment::DatabaseUrl::parse_url(database_url);
    }

    logging::init_from_env()?;

    info!("Starting Player Registry");
    info!("{}", config.summary());

    let store = SqliteStore::new(&config.database.url.to_connection_string()).await?;
    info!(
        "Store initialized: {}",
        config.database.url.to_connection_string()
    );

    let config = Arc::new(config);
    let resources = Arc::new(ServerResources::new(Arc::new(store), config.clone()));

    display_available_endpoints(&config);

    server::serve(resources, config.http_port).await
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = config.http_port;
    let prefix = routes::PLAYERS_PREFIX;

    info!("=== Available API Endpoints ===");
    info!("Players:");
    info!("   List Players:      GET    http://{host}:{port}{prefix}");
    info!("   Count Players:     GET    http://{host}:{port}{prefix}/count");
    info!("   Get Player:        GET    http://{host}:{port}{prefix}/{{id}}");
    info!("   Create Player:     POST   http://{host}:{port}{prefix}");
    info!("   Update Player:     POST   http://{host}:{port}{prefix}/{{id}}");
    info!("   Delete Player:     DELETE http://{host}:{port}{prefix}/{{id}}");
    info!("Monitoring:");
    info!("   Health Check:      GET    http://{host}:{port}/health");
    info!("   Readiness:         GET    http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
