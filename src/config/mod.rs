// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for the player registry
//!
//! Server configuration is loaded from environment variables (with `.env`
//! support) into strongly typed values.

/// Environment and server configuration
pub mod environment;
