// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Provides protocol-agnostic orchestration over the record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain service layer
//!
//! Business logic extracted from route handlers so the routes module
//! contains only extraction and response shaping.

/// Player CRUD orchestration over the record store
pub mod players;

pub use players::PlayerService;
