// ABOUTME: System-wide constants and environment-based configuration values
// ABOUTME: Contains field limits, pagination defaults, and env var accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Constants Module
//!
//! Application constants and environment variable configuration.
//! Field limits mirror what the persistence layer enforces; pagination
//! defaults apply whenever the client omits the corresponding parameter.

use std::env;

/// Validation limits for player fields
pub mod limits {
    /// Maximum length of a player name in characters
    pub const MAX_NAME_LEN: usize = 12;

    /// Maximum length of a player title in characters
    pub const MAX_TITLE_LEN: usize = 30;

    /// Maximum accepted experience value (inclusive)
    pub const MAX_EXPERIENCE: i32 = 10_000_000;

    /// Earliest accepted birthday on update: 2000-01-01T00:00:00Z in epoch milliseconds
    pub const MIN_BIRTHDAY_MS: i64 = 946_684_800_000;

    /// Latest accepted birthday on update: end of year 2999 in epoch milliseconds
    pub const MAX_BIRTHDAY_MS: i64 = 3_253_521_599_900;
}

/// Default values applied when configuration or request parameters are absent
pub mod defaults {
    /// Default HTTP port for the REST API
    pub const DEFAULT_HTTP_PORT: u16 = 8080;

    /// Default page index for list queries
    pub const DEFAULT_PAGE_NUMBER: u32 = 0;

    /// Default page size for list queries
    pub const DEFAULT_PAGE_SIZE: u32 = 3;

    /// Default database location when `DATABASE_URL` is unset
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/players.db";

    /// Default CORS policy (allow any origin, development mode)
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
}

/// Route path constants
pub mod routes {
    /// Prefix under which all player endpoints are mounted
    pub const PLAYERS_PREFIX: &str = "/rest/players";
}

/// Service identification for logging
pub mod service_names {
    /// Canonical service name used in structured log output
    pub const PLAYER_REGISTRY: &str = "player-registry";
}

/// Environment-based configuration accessors
pub mod env_config {
    use super::env;

    /// Get database URL from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| super::defaults::DEFAULT_DATABASE_URL.into())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    }

    /// Get allowed CORS origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| super::defaults::DEFAULT_CORS_ORIGINS.into())
    }
}
