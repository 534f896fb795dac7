// ABOUTME: Field-level validation for create and partial-update payloads
// ABOUTME: Also parses path identifiers into positive integer player ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Validation Layer
//!
//! Acceptance rules for player payloads. Creation requires name, title,
//! race, profession, birthday, and experience; updates validate only the
//! fields that are present and reject the whole patch on the first
//! violation, leaving the stored record untouched.
//!
//! Creation accepts any non-negative birthday while updates enforce the
//! year 2000..3000 bounds. The asymmetry is inherited from the original
//! controller/service split and is deliberate.

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::models::{CreatePlayerRequest, Profession, Race, UpdatePlayerRequest};
use chrono::{DateTime, TimeZone, Utc};
use std::str::FromStr;

/// A creation payload that passed every acceptance rule
#[derive(Debug, Clone)]
pub struct ValidatedCreate {
    /// Character name (1..=12 chars)
    pub name: String,
    /// Character title (0..=30 chars)
    pub title: String,
    /// Parsed race
    pub race: Race,
    /// Parsed profession
    pub profession: Profession,
    /// Birthday as a UTC timestamp
    pub birthday: DateTime<Utc>,
    /// Starting experience (0..=10,000,000)
    pub experience: i32,
    /// Banned flag (defaults to false)
    pub banned: bool,
}

/// An update payload with every present field individually validated
#[derive(Debug, Clone, Default)]
pub struct ValidatedUpdate {
    /// New name, applied without a length re-check
    pub name: Option<String>,
    /// New title, applied without a length re-check
    pub title: Option<String>,
    /// New race
    pub race: Option<Race>,
    /// New profession
    pub profession: Option<Profession>,
    /// New birthday within the year 2000..3000 bounds
    pub birthday: Option<DateTime<Utc>>,
    /// New experience within range
    pub experience: Option<i32>,
    /// New banned flag
    pub banned: Option<bool>,
}

/// Parse a path identifier into a positive player id.
///
/// # Errors
///
/// Returns an `INVALID_ID` error when the raw segment is not a positive
/// integer (non-numeric, zero, or negative).
pub fn parse_player_id(raw: &str) -> AppResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::invalid_id(raw)),
    }
}

/// Validate a creation payload and resolve it into typed fields.
///
/// # Errors
///
/// Returns `MISSING_REQUIRED_FIELD` for absent fields, `INVALID_INPUT` for
/// malformed strings or unknown enum values, and `VALUE_OUT_OF_RANGE` for
/// experience outside `0..=10_000_000`.
pub fn validate_create(request: &CreatePlayerRequest) -> AppResult<ValidatedCreate> {
    let name = request
        .name
        .as_deref()
        .ok_or_else(|| AppError::missing_field("name"))?;
    if name.is_empty() || name.chars().count() > limits::MAX_NAME_LEN {
        return Err(AppError::invalid_input(format!(
            "Field 'name' must be 1 to {} characters",
            limits::MAX_NAME_LEN
        )));
    }

    let title = request
        .title
        .as_deref()
        .ok_or_else(|| AppError::missing_field("title"))?;
    if title.chars().count() > limits::MAX_TITLE_LEN {
        return Err(AppError::invalid_input(format!(
            "Field 'title' must be at most {} characters",
            limits::MAX_TITLE_LEN
        )));
    }

    let race = parse_race(
        request
            .race
            .as_deref()
            .ok_or_else(|| AppError::missing_field("race"))?,
    )?;
    let profession = parse_profession(
        request
            .profession
            .as_deref()
            .ok_or_else(|| AppError::missing_field("profession"))?,
    )?;

    let birthday_ms = request
        .birthday
        .ok_or_else(|| AppError::missing_field("birthday"))?;
    if birthday_ms < 0 {
        return Err(AppError::invalid_input(
            "Field 'birthday' must be a non-negative timestamp",
        ));
    }
    let birthday = timestamp_from_millis(birthday_ms)?;

    let experience = request
        .experience
        .ok_or_else(|| AppError::missing_field("experience"))?;
    validate_experience(experience)?;

    Ok(ValidatedCreate {
        name: name.to_owned(),
        title: title.to_owned(),
        race,
        profession,
        birthday,
        experience,
        banned: request.banned.unwrap_or(false),
    })
}

/// Validate a partial-update payload.
///
/// Every present field is checked before any of them is applied, so a
/// violation rejects the whole patch.
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` for experience or birthday violations and
/// `INVALID_INPUT` for unknown race/profession values.
pub fn validate_update(request: &UpdatePlayerRequest) -> AppResult<ValidatedUpdate> {
    if let Some(experience) = request.experience {
        validate_experience(experience)?;
    }

    let birthday = request
        .birthday
        .map(|ms| {
            if (limits::MIN_BIRTHDAY_MS..=limits::MAX_BIRTHDAY_MS).contains(&ms) {
                timestamp_from_millis(ms)
            } else {
                Err(AppError::out_of_range(
                    "birthday",
                    limits::MIN_BIRTHDAY_MS,
                    limits::MAX_BIRTHDAY_MS,
                ))
            }
        })
        .transpose()?;

    let race = request.race.as_deref().map(parse_race).transpose()?;
    let profession = request
        .profession
        .as_deref()
        .map(parse_profession)
        .transpose()?;

    Ok(ValidatedUpdate {
        name: request.name.clone(),
        title: request.title.clone(),
        race,
        profession,
        birthday,
        experience: request.experience,
        banned: request.banned,
    })
}

fn validate_experience(experience: i32) -> AppResult<()> {
    if (0..=limits::MAX_EXPERIENCE).contains(&experience) {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            "experience",
            0,
            i64::from(limits::MAX_EXPERIENCE),
        ))
    }
}

/// Parse a race wire value against the closed enum.
///
/// # Errors
///
/// Returns `INVALID_INPUT` for values outside the fixed set.
pub fn parse_race(raw: &str) -> AppResult<Race> {
    Race::from_str(raw).map_err(|_| AppError::invalid_input(format!("Invalid race: {raw}")))
}

/// Parse a profession wire value against the closed enum.
///
/// # Errors
///
/// Returns `INVALID_INPUT` for values outside the fixed set.
pub fn parse_profession(raw: &str) -> AppResult<Profession> {
    Profession::from_str(raw)
        .map_err(|_| AppError::invalid_input(format!("Invalid profession: {raw}")))
}

fn timestamp_from_millis(ms: i64) -> AppResult<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| AppError::invalid_input(format!("'{ms}' is not a valid timestamp")))
}
