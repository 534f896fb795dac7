// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common store, resource, and sample-player helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `player_registry`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use player_registry::{
    config::environment::ServerConfig,
    leveling,
    models::{Player, Profession, Race},
    server::ServerResources,
    store::{PlayerStore, SqliteStore},
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory test store setup
pub async fn create_test_store() -> Result<Arc<SqliteStore>> {
    init_test_logging();
    let store = SqliteStore::new("sqlite::memory:").await?;
    Ok(Arc::new(store))
}

/// Build server resources around a fresh in-memory store
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let store = create_test_store().await?;
    let config = Arc::new(ServerConfig::default());
    Ok(Arc::new(ServerResources::new(store, config)))
}

/// A birthday at a fixed instant, offset by whole days for variety
pub fn test_birthday(days_offset: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_000_000_000_000 + days_offset * 86_400_000)
        .single()
        .expect("valid test timestamp")
}

/// A fully-derived player record ready for insertion (id 0 = unsaved)
pub fn sample_player(name: &str, experience: i32) -> Player {
    let progression = leveling::progression_for(experience);
    Player {
        id: 0,
        name: name.to_owned(),
        title: format!("{name} the Tested"),
        race: Race::Human,
        profession: Profession::Warrior,
        birthday: test_birthday(0),
        experience,
        level: progression.level,
        experience_until_next_level: progression.until_next_level,
        banned: false,
    }
}

/// Insert a player and return the stored record with its assigned id
pub async fn seed_player(store: &dyn PlayerStore, name: &str, experience: i32) -> Result<Player> {
    store.save(&sample_player(name, experience)).await
}
