// ABOUTME: Player CRUD route handlers for the REST API
// ABOUTME: Provides list, count, get, create, partial update, and delete endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Player management routes
//!
//! All six endpoints live under `/rest/players`. Handlers are thin: they
//! extract and parse parameters, delegate to [`crate::services::PlayerService`],
//! and shape the response. The path identifier is extracted as a raw string
//! so malformed ids produce the `INVALID_ID` envelope instead of a generic
//! extractor rejection.

use crate::constants::{defaults, routes as route_paths};
use crate::errors::AppError;
use crate::models::{CreatePlayerRequest, PlayerOrder, UpdatePlayerRequest};
use crate::query::PlayerFilter;
use crate::server::ServerResources;
use crate::validation;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Query parameters accepted by the list and count endpoints
///
/// Count ignores the pagination and order fields; everything else is a
/// filter predicate. All parameters are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPlayersQuery {
    /// Case-insensitive substring filter on name
    pub name: Option<String>,
    /// Case-insensitive substring filter on title
    pub title: Option<String>,
    /// Exact race filter (uppercase wire value)
    pub race: Option<String>,
    /// Exact profession filter (uppercase wire value)
    pub profession: Option<String>,
    /// Inclusive lower birthday bound, epoch milliseconds
    pub after: Option<i64>,
    /// Inclusive upper birthday bound, epoch milliseconds
    pub before: Option<i64>,
    /// Inclusive lower experience bound
    pub min_experience: Option<i32>,
    /// Inclusive upper experience bound
    pub max_experience: Option<i32>,
    /// Inclusive lower level bound
    pub min_level: Option<i32>,
    /// Inclusive upper level bound
    pub max_level: Option<i32>,
    /// Exact banned-flag filter
    pub banned: Option<bool>,
    /// Zero-based page index (default 0)
    pub page_number: Option<u32>,
    /// Page size (default 3)
    pub page_size: Option<u32>,
    /// Sort key (default ID)
    pub order: Option<String>,
}

impl ListPlayersQuery {
    /// Resolve the filter predicates, parsing enum wire values
    fn filter(&self) -> Result<PlayerFilter, AppError> {
        Ok(PlayerFilter {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race.as_deref().map(validation::parse_race).transpose()?,
            profession: self
                .profession
                .as_deref()
                .map(validation::parse_profession)
                .transpose()?,
            after: self.after,
            before: self.before,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
            banned: self.banned,
        })
    }

    /// Resolve the sort key, defaulting to ID
    fn order(&self) -> Result<PlayerOrder, AppError> {
        self.order.as_deref().map_or(Ok(PlayerOrder::Id), |raw| {
            PlayerOrder::from_str(raw)
                .map_err(|_| AppError::invalid_input(format!("Invalid order: {raw}")))
        })
    }
}

/// Player management routes
pub struct PlayerRoutes;

impl PlayerRoutes {
    /// Create all player routes under `/rest/players`
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let prefix = route_paths::PLAYERS_PREFIX;
        Router::new()
            .route(
                prefix,
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(&format!("{prefix}/count"), get(Self::handle_count))
            .route(
                &format!("{prefix}/:id"),
                get(Self::handle_get)
                    .post(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle `GET /rest/players`
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ListPlayersQuery>,
    ) -> Result<Response, AppError> {
        let filter = params.filter()?;
        let order = params.order()?;
        let page_number = params.page_number.unwrap_or(defaults::DEFAULT_PAGE_NUMBER);
        let page_size = params.page_size.unwrap_or(defaults::DEFAULT_PAGE_SIZE);

        let players = resources
            .players
            .list(&filter, order, page_number, page_size)
            .await?;

        Ok((StatusCode::OK, Json(players)).into_response())
    }

    /// Handle `GET /rest/players/count`
    async fn handle_count(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ListPlayersQuery>,
    ) -> Result<Response, AppError> {
        let filter = params.filter()?;
        let count = resources.players.count(&filter).await?;

        Ok((StatusCode::OK, Json(count)).into_response())
    }

    /// Handle `GET /rest/players/{id}`
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(raw_id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = validation::parse_player_id(&raw_id)?;
        let player = resources.players.get(id).await?;

        Ok((StatusCode::OK, Json(player)).into_response())
    }

    /// Handle `POST /rest/players`
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreatePlayerRequest>,
    ) -> Result<Response, AppError> {
        let player = resources
            .players
            .create(&request)
            .await
            .inspect_err(|e| warn!(error = %e, "player creation rejected"))?;

        info!(player.id = %player.id, player.name = %player.name, "player created");

        Ok((StatusCode::CREATED, Json(player)).into_response())
    }

    /// Handle `POST /rest/players/{id}` (partial update)
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(raw_id): Path<String>,
        Json(request): Json<UpdatePlayerRequest>,
    ) -> Result<Response, AppError> {
        let id = validation::parse_player_id(&raw_id)?;
        let player = resources
            .players
            .update(id, &request)
            .await
            .inspect_err(|e| warn!(player.id = %id, error = %e, "player update rejected"))?;

        info!(player.id = %player.id, "player updated");

        Ok((StatusCode::OK, Json(player)).into_response())
    }

    /// Handle `DELETE /rest/players/{id}`
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(raw_id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = validation::parse_player_id(&raw_id)?;
        resources.players.delete(id).await?;

        info!(player.id = %id, "player deleted");

        Ok(StatusCode::OK.into_response())
    }
}
