// ABOUTME: Closed-form level progression derived from accumulated experience
// ABOUTME: Pure calculator mapping experience to (level, experience until next level)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Leveling Calculator
//!
//! Inverts the quadratic experience curve `total(level) = 50 * level * (level + 1)`
//! to derive the current level from accumulated experience, plus how much
//! experience remains until the next level. Input is pre-validated by the
//! caller to lie in `0..=10_000_000`; the derivation itself is total.

/// Derived progression fields for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    /// Current level
    pub level: i32,
    /// Experience remaining until the next level
    pub until_next_level: i32,
}

/// Derive level fields from accumulated experience.
///
/// `level = floor((sqrt(2500 + 200 * experience) - 50) / 100)` and
/// `until_next = 50 * (level + 1) * (level + 2) - experience`.
#[must_use]
pub fn progression_for(experience: i32) -> Progression {
    // Discriminant stays below 2^31 for the valid experience range, but the
    // square root needs f64 precision to land on exact integers (e.g. 150.0
    // for experience 100).
    let discriminant = 200.0_f64.mul_add(f64::from(experience), 2500.0);
    // Safe: (sqrt(2.0e9) - 50) / 100 < 450, well within i32
    #[allow(clippy::cast_possible_truncation)]
    let level = ((discriminant.sqrt() - 50.0) / 100.0).floor() as i32;
    let until_next_level = 50 * (level + 1) * (level + 2) - experience;

    Progression {
        level,
        until_next_level,
    }
}
