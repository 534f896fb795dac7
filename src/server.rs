// ABOUTME: Shared server resources, router composition, and the serve loop
// ABOUTME: Binds the HTTP listener and runs axum with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # HTTP Server
//!
//! [`ServerResources`] is the dependency container shared by every handler
//! through axum state. [`router`] composes the domain routers with the
//! CORS and trace layers; [`serve`] binds the listener and runs until
//! ctrl-c.

use crate::config::environment::ServerConfig;
use crate::middleware::setup_cors;
use crate::routes::{HealthRoutes, PlayerRoutes};
use crate::services::PlayerService;
use crate::store::PlayerStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Centralized resource container for dependency injection
///
/// Holds the shared store handle and configuration so handlers never
/// recreate them per request.
pub struct ServerResources {
    /// Record store collaborator
    pub store: Arc<dyn PlayerStore>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Player orchestration service over the store
    pub players: PlayerService,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(store: Arc<dyn PlayerStore>, config: Arc<ServerConfig>) -> Self {
        let players = PlayerService::new(store.clone());
        Self {
            store,
            config,
            players,
        }
    }
}

/// Compose the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(PlayerRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind the listener and serve until shutdown.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server loop fails.
pub async fn serve(resources: Arc<ServerResources>, port: u16) -> Result<()> {
    let app = router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port = %port, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
