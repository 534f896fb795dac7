// ABOUTME: Main library entry point for the player registry REST service
// ABOUTME: Exposes the module tree for the binary and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Player Registry
//!
//! A REST API for managing game-character records. Each player carries a
//! name, title, race, profession, birthday, and experience; the level and
//! the experience remaining until the next level are derived from
//! experience through a fixed quadratic-inverse formula.
//!
//! ## Architecture
//!
//! - **Models**: the `Player` record and its closed enumerations
//! - **Leveling**: pure experience-to-level derivation
//! - **Validation**: create/update acceptance rules and id parsing
//! - **Query**: filter, stable sort, and pagination over a full store scan
//! - **Store**: the `PlayerStore` trait and its SQLite implementation
//! - **Services**: thin orchestration between validation, leveling, and store
//! - **Routes/Server**: axum handlers, router composition, and the serve loop
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use player_registry::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Player registry configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// System-wide constants and environment accessors
pub mod constants;

/// Unified error handling and the JSON error envelope
pub mod errors;

/// Experience-to-level derivation
pub mod leveling;

/// Logging configuration and initialization
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Core data models and payload DTOs
pub mod models;

/// Filter, sort, and pagination over record snapshots
pub mod query;

/// HTTP route handlers organized by domain
pub mod routes;

/// Server resources, router composition, and serve loop
pub mod server;

/// Domain service layer
pub mod services;

/// Record store trait and SQLite backend
pub mod store;

/// Payload validation and id parsing
pub mod validation;
