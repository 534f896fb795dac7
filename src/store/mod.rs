// ABOUTME: Record store abstraction for player persistence
// ABOUTME: Defines the PlayerStore trait implemented by the SQLite backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Record Store
//!
//! Persistence seam for player records. The service layer only ever talks
//! to [`PlayerStore`]; the SQLite implementation lives in [`sqlite`].
//! No transaction or isolation semantics are promised beyond what a single
//! store call provides, so a read-then-write pair is not atomic against
//! concurrent writers.

pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::models::Player;
use anyhow::Result;
use async_trait::async_trait;

/// Persistence operations for player records
///
/// `save` treats an `id` of 0 as an unsaved record: it inserts and returns
/// the record with its store-assigned id. Any other id updates in place.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Load every record (unbounded scan, ordered by id)
    async fn get_all(&self) -> Result<Vec<Player>>;

    /// Look up a single record by id
    async fn get_by_id(&self, id: i64) -> Result<Option<Player>>;

    /// Insert (id 0) or update a record, returning the persisted form
    async fn save(&self, player: &Player) -> Result<Player>;

    /// Remove a record
    async fn delete(&self, player: &Player) -> Result<()>;

    /// Total number of persisted records
    async fn count(&self) -> Result<i64>;
}
