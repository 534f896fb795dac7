// ABOUTME: HTTP middleware for cross-cutting request concerns
// ABOUTME: Currently hosts the CORS layer built from server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
