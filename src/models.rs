// ABOUTME: Core data models for the player registry REST API
// ABOUTME: Defines Player, the closed Race/Profession/PlayerOrder enums, and payload DTOs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! The [`Player`] record and the closed enumerations it references.
//! Enum wire values are uppercase; record fields serialize in camelCase to
//! match the original wire format. `level` and `experienceUntilNextLevel`
//! are derived from `experience` and never accepted from clients.

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Race of a game character (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Race {
    /// Baseline race
    Human,
    /// Mountain folk
    Dwarf,
    /// Forest folk
    Elf,
    /// Oversized brawler
    Giant,
    /// Regenerating brute
    Troll,
    /// Halfling
    Hobbit,
    /// Horde fighter
    Orc,
}

impl Race {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "HUMAN",
            Self::Dwarf => "DWARF",
            Self::Elf => "ELF",
            Self::Giant => "GIANT",
            Self::Troll => "TROLL",
            Self::Hobbit => "HOBBIT",
            Self::Orc => "ORC",
        }
    }
}

impl Display for Race {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Race {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HUMAN" => Ok(Self::Human),
            "DWARF" => Ok(Self::Dwarf),
            "ELF" => Ok(Self::Elf),
            "GIANT" => Ok(Self::Giant),
            "TROLL" => Ok(Self::Troll),
            "HOBBIT" => Ok(Self::Hobbit),
            "ORC" => Ok(Self::Orc),
            _ => Err(AppError::invalid_input(format!("Invalid race: {s}")).into()),
        }
    }
}

/// Profession of a game character (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Profession {
    /// Melee fighter
    Warrior,
    /// Stealth specialist
    Rogue,
    /// Offensive caster
    Sorcerer,
    /// Healer
    Cleric,
    /// Holy knight
    Paladin,
    /// Ringwraith
    Nazgul,
    /// Pact caster
    Warlock,
    /// Nature caster
    Druid,
}

impl Profession {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warrior => "WARRIOR",
            Self::Rogue => "ROGUE",
            Self::Sorcerer => "SORCERER",
            Self::Cleric => "CLERIC",
            Self::Paladin => "PALADIN",
            Self::Nazgul => "NAZGUL",
            Self::Warlock => "WARLOCK",
            Self::Druid => "DRUID",
        }
    }
}

impl Display for Profession {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Profession {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WARRIOR" => Ok(Self::Warrior),
            "ROGUE" => Ok(Self::Rogue),
            "SORCERER" => Ok(Self::Sorcerer),
            "CLERIC" => Ok(Self::Cleric),
            "PALADIN" => Ok(Self::Paladin),
            "NAZGUL" => Ok(Self::Nazgul),
            "WARLOCK" => Ok(Self::Warlock),
            "DRUID" => Ok(Self::Druid),
            _ => Err(AppError::invalid_input(format!("Invalid profession: {s}")).into()),
        }
    }
}

/// Sort key for list queries (exactly one, ascending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerOrder {
    /// Sort by record identifier (default)
    #[default]
    Id,
    /// Sort by name, lexicographic
    Name,
    /// Sort by experience
    Experience,
    /// Sort by birthday timestamp
    Birthday,
}

impl PlayerOrder {
    /// Convert to the wire/query-parameter value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "NAME",
            Self::Experience => "EXPERIENCE",
            Self::Birthday => "BIRTHDAY",
        }
    }
}

impl Display for PlayerOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlayerOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ID" => Ok(Self::Id),
            "NAME" => Ok(Self::Name),
            "EXPERIENCE" => Ok(Self::Experience),
            "BIRTHDAY" => Ok(Self::Birthday),
            _ => Err(AppError::invalid_input(format!("Invalid order: {s}")).into()),
        }
    }
}

/// A persisted game-character record
///
/// `id` is assigned by the store and immutable. `level` and
/// `experience_until_next_level` are recomputed whenever `experience`
/// changes; they are never taken from client payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Store-assigned positive identifier
    pub id: i64,
    /// Character name, at most 12 characters
    pub name: String,
    /// Character title, at most 30 characters
    pub title: String,
    /// Character race
    pub race: Race,
    /// Character profession
    pub profession: Profession,
    /// Birthday, epoch milliseconds on the wire
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: DateTime<Utc>,
    /// Accumulated experience, 0 to 10,000,000 inclusive
    pub experience: i32,
    /// Derived level
    pub level: i32,
    /// Derived experience remaining until the next level
    pub experience_until_next_level: i32,
    /// Whether the character is banned
    pub banned: bool,
}

/// Payload for `POST /rest/players` (create)
///
/// All fields are optional at the deserialization layer so that missing
/// ones can be rejected with a field-naming error instead of a generic
/// body rejection. `race` and `profession` arrive as strings and are
/// parsed against the closed enums during validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    /// Character name
    pub name: Option<String>,
    /// Character title
    pub title: Option<String>,
    /// Race wire value (uppercase)
    pub race: Option<String>,
    /// Profession wire value (uppercase)
    pub profession: Option<String>,
    /// Birthday in epoch milliseconds
    pub birthday: Option<i64>,
    /// Starting experience
    pub experience: Option<i32>,
    /// Banned flag, defaults to false
    pub banned: Option<bool>,
}

/// Payload for `POST /rest/players/{id}` (partial update)
///
/// Absent fields leave the stored value unchanged. An entirely empty
/// payload is a no-op read, not an error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    /// New character name
    pub name: Option<String>,
    /// New character title
    pub title: Option<String>,
    /// New race wire value (uppercase)
    pub race: Option<String>,
    /// New profession wire value (uppercase)
    pub profession: Option<String>,
    /// New birthday in epoch milliseconds
    pub birthday: Option<i64>,
    /// New experience (re-derives level fields)
    pub experience: Option<i32>,
    /// New banned flag
    pub banned: Option<bool>,
}

impl UpdatePlayerRequest {
    /// True when every field is absent (the no-op read case)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.race.is_none()
            && self.profession.is_none()
            && self.birthday.is_none()
            && self.experience.is_none()
            && self.banned.is_none()
    }
}
