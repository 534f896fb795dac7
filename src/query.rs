// ABOUTME: Query engine applying filter predicates, stable sorting, and pagination
// ABOUTME: Operates on a transient snapshot of the full player record set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Query Engine
//!
//! Pure list/count pipeline over a full record scan: AND-combined optional
//! predicates, a single ascending sort key, and zero-based slice pagination.
//! Ties on the sort key keep their scan order (`sort_by` is stable), so a
//! fixed record set and fixed parameters always produce the same output.

use crate::models::{Player, PlayerOrder, Profession, Race};
use serde::{Deserialize, Serialize};

/// Optional predicates narrowing a list/count result, combined with AND
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerFilter {
    /// Case-insensitive substring match against the record name
    pub name: Option<String>,
    /// Case-insensitive substring match against the record title
    pub title: Option<String>,
    /// Exact race equality
    pub race: Option<Race>,
    /// Exact profession equality
    pub profession: Option<Profession>,
    /// Inclusive lower bound on birthday, epoch milliseconds
    pub after: Option<i64>,
    /// Inclusive upper bound on birthday, epoch milliseconds
    pub before: Option<i64>,
    /// Inclusive lower bound on experience
    pub min_experience: Option<i32>,
    /// Inclusive upper bound on experience
    pub max_experience: Option<i32>,
    /// Inclusive lower bound on level
    pub min_level: Option<i32>,
    /// Inclusive upper bound on level
    pub max_level: Option<i32>,
    /// Exact banned-flag equality
    pub banned: Option<bool>,
}

impl PlayerFilter {
    /// True when the record satisfies every present predicate
    #[must_use]
    pub fn matches(&self, player: &Player) -> bool {
        let birthday_ms = player.birthday.timestamp_millis();

        self.name
            .as_deref()
            .is_none_or(|needle| contains_ignore_case(&player.name, needle))
            && self
                .title
                .as_deref()
                .is_none_or(|needle| contains_ignore_case(&player.title, needle))
            && self.race.is_none_or(|race| player.race == race)
            && self
                .profession
                .is_none_or(|profession| player.profession == profession)
            && self.after.is_none_or(|after| birthday_ms >= after)
            && self.before.is_none_or(|before| birthday_ms <= before)
            && self.min_experience.is_none_or(|min| player.experience >= min)
            && self.max_experience.is_none_or(|max| player.experience <= max)
            && self.min_level.is_none_or(|min| player.level >= min)
            && self.max_level.is_none_or(|max| player.level <= max)
            && self.banned.is_none_or(|banned| player.banned == banned)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Run the full pipeline: filter, stable sort, slice.
///
/// A page index past the available range yields an empty vector.
#[must_use]
pub fn run(
    players: Vec<Player>,
    filter: &PlayerFilter,
    order: PlayerOrder,
    page_number: u32,
    page_size: u32,
) -> Vec<Player> {
    let mut matching: Vec<Player> = players
        .into_iter()
        .filter(|player| filter.matches(player))
        .collect();
    sort_players(&mut matching, order);
    paginate(matching, page_number, page_size)
}

/// Count the records satisfying the filter (no sort, no pagination)
#[must_use]
pub fn count(players: &[Player], filter: &PlayerFilter) -> i64 {
    // Safe: a record count never approaches i64::MAX
    #[allow(clippy::cast_possible_wrap)]
    {
        players.iter().filter(|player| filter.matches(player)).count() as i64
    }
}

/// Sort by the single order key ascending; ties keep their scan order
pub fn sort_players(players: &mut [Player], order: PlayerOrder) {
    match order {
        PlayerOrder::Id => players.sort_by(|a, b| a.id.cmp(&b.id)),
        PlayerOrder::Name => players.sort_by(|a, b| a.name.cmp(&b.name)),
        PlayerOrder::Experience => players.sort_by(|a, b| a.experience.cmp(&b.experience)),
        PlayerOrder::Birthday => players.sort_by(|a, b| a.birthday.cmp(&b.birthday)),
    }
}

/// Return the slice `[page_number * page_size, page_number * page_size + page_size)`
#[must_use]
pub fn paginate(players: Vec<Player>, page_number: u32, page_size: u32) -> Vec<Player> {
    let start = page_number as usize * page_size as usize;
    players
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect()
}
