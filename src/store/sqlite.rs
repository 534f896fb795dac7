// ABOUTME: SQLite-backed player store using sqlx with an idempotent migration
// ABOUTME: Maps rows manually via try_get; supports file and in-memory databases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # SQLite Store
//!
//! [`SqliteStore`] persists players in a single `players` table created at
//! connection time. File URLs are opened with create-if-missing so a fresh
//! deployment needs no manual setup; `sqlite::memory:` backs the test suite.

use super::PlayerStore;
use crate::models::{Player, Profession, Race};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;

/// SQLite-backed implementation of [`PlayerStore`]
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database and run the schema migration.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // Every pooled connection to :memory: would open its own empty
        // database, so the in-memory case is pinned to a single connection.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(&connection_options)
                .await?
        } else {
            SqlitePool::connect(&connection_options).await?
        };

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Run the schema migration (idempotent)
    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                race TEXT NOT NULL,
                profession TEXT NOT NULL,
                birthday INTEGER NOT NULL,
                experience INTEGER NOT NULL,
                level INTEGER NOT NULL,
                experience_until_next_level INTEGER NOT NULL,
                banned INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_player(row: &SqliteRow) -> Result<Player> {
        let race_str: String = row.try_get("race")?;
        let profession_str: String = row.try_get("profession")?;
        let birthday_ms: i64 = row.try_get("birthday")?;

        let birthday = Utc
            .timestamp_millis_opt(birthday_ms)
            .single()
            .ok_or_else(|| anyhow!("Invalid birthday timestamp in row: {birthday_ms}"))?;

        Ok(Player {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            title: row.try_get("title")?,
            race: Race::from_str(&race_str).context("Invalid race in row")?,
            profession: Profession::from_str(&profession_str)
                .context("Invalid profession in row")?,
            birthday,
            experience: row.try_get("experience")?,
            level: row.try_get("level")?,
            experience_until_next_level: row.try_get("experience_until_next_level")?,
            banned: row.try_get("banned")?,
        })
    }

    async fn insert(&self, player: &Player) -> Result<Player> {
        let result = sqlx::query(
            r"
            INSERT INTO players (name, title, race, profession, birthday,
                                 experience, level, experience_until_next_level, banned)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&player.name)
        .bind(&player.title)
        .bind(player.race.as_str())
        .bind(player.profession.as_str())
        .bind(player.birthday.timestamp_millis())
        .bind(player.experience)
        .bind(player.level)
        .bind(player.experience_until_next_level)
        .bind(player.banned)
        .execute(&self.pool)
        .await?;

        let mut persisted = player.clone();
        persisted.id = result.last_insert_rowid();
        Ok(persisted)
    }

    async fn update(&self, player: &Player) -> Result<Player> {
        sqlx::query(
            r"
            UPDATE players
            SET name = ?, title = ?, race = ?, profession = ?, birthday = ?,
                experience = ?, level = ?, experience_until_next_level = ?, banned = ?
            WHERE id = ?
            ",
        )
        .bind(&player.name)
        .bind(&player.title)
        .bind(player.race.as_str())
        .bind(player.profession.as_str())
        .bind(player.birthday.timestamp_millis())
        .bind(player.experience)
        .bind(player.level)
        .bind(player.experience_until_next_level)
        .bind(player.banned)
        .bind(player.id)
        .execute(&self.pool)
        .await?;

        Ok(player.clone())
    }
}

#[async_trait]
impl PlayerStore for SqliteStore {
    async fn get_all(&self) -> Result<Vec<Player>> {
        let rows = sqlx::query("SELECT * FROM players ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_player).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Player>> {
        let row = sqlx::query("SELECT * FROM players WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_player).transpose()
    }

    async fn save(&self, player: &Player) -> Result<Player> {
        if player.id == 0 {
            self.insert(player).await
        } else {
            self.update(player).await
        }
    }

    async fn delete(&self, player: &Player) -> Result<()> {
        sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(player.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM players")
            .fetch_one(&self.pool)
            .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count)
    }
}
