// ABOUTME: Route module organization for player registry HTTP endpoints
// ABOUTME: Each domain module contains route definitions and thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module for the player registry
//!
//! Routes are organized by domain. Each module contains only route
//! definitions and thin handler functions that delegate to service layers.

/// Health check and readiness routes
pub mod health;
/// Player CRUD routes
pub mod players;

pub use health::HealthRoutes;
pub use players::PlayerRoutes;
