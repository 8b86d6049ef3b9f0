// ABOUTME: Numeric constants of the weekly periodization heuristic
// ABOUTME: Intensity and volume bases, experience shifts, adherence factors, and clamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants of the weekly planning heuristic
//!
//! Intensity is expressed as a fraction of the effort ceiling; volume as hard
//! working sets per session. Changing any value here changes generated plans for
//! every user, and previously persisted weeks will be rewritten on the next run.

/// Base intensity per archetype (fraction of effort ceiling)
pub mod base_intensity {
    /// Strength archetype
    pub const STRENGTH: f64 = 0.80;
    /// Hypertrophy archetype
    pub const HYPERTROPHY: f64 = 0.65;
    /// Endurance archetype
    pub const ENDURANCE: f64 = 0.60;
    /// Recomposition archetype
    pub const RECOMPOSITION: f64 = 0.70;
    /// General archetype
    pub const GENERAL: f64 = 0.70;
}

/// Base volume per archetype (hard sets per session)
pub mod base_volume {
    /// Strength archetype
    pub const STRENGTH: i64 = 10;
    /// Hypertrophy archetype
    pub const HYPERTROPHY: i64 = 14;
    /// Endurance archetype
    pub const ENDURANCE: i64 = 8;
    /// Recomposition archetype
    pub const RECOMPOSITION: i64 = 12;
    /// General archetype
    pub const GENERAL: i64 = 12;
}

/// Experience and frequency adjustments to the base load
pub mod load_adjustments {
    /// Intensity shift: subtracted for beginners, added for advanced
    pub const EXPERIENCE_INTENSITY_SHIFT: f64 = 0.05;
    /// Volume shift: subtracted for beginners, added for advanced
    pub const EXPERIENCE_VOLUME_SHIFT: i64 = 2;
    /// At or above this many requested days, volume gets +1
    pub const HIGH_FREQUENCY_DAYS: usize = 5;
    /// At or below this many requested days, volume gets -1
    pub const LOW_FREQUENCY_DAYS: usize = 3;
    /// Per-session volume never drops below this before modulation
    pub const MIN_BASE_VOLUME: i64 = 6;
}

/// Adherence modulation over the lookback window
pub mod adherence {
    /// Days of history inspected before the start date
    pub const LOOKBACK_DAYS: i64 = 7;
    /// Logged sessions at or above this count push the plan up
    pub const HIGH_ADHERENCE_SESSIONS: u32 = 5;
    /// Logged sessions at or below this count pull the plan down
    pub const LOW_ADHERENCE_SESSIONS: u32 = 2;
    /// Volume multiplier after a high-adherence week
    pub const HIGH_VOLUME_FACTOR: f64 = 1.1;
    /// Volume multiplier after a low-adherence week
    pub const LOW_VOLUME_FACTOR: f64 = 0.9;
    /// Intensity nudge magnitude
    pub const INTENSITY_NUDGE: f64 = 0.02;
    /// Weight of the planned base volume in the history blend
    pub const BASE_VOLUME_WEIGHT: f64 = 0.7;
    /// Weight of the historical average volume in the history blend
    pub const HISTORY_VOLUME_WEIGHT: f64 = 0.3;
}

/// Final clamps applied to every training day
pub mod prescription_bounds {
    /// Lowest intensity ever prescribed
    pub const MIN_INTENSITY: f64 = 0.55;
    /// Highest intensity ever prescribed
    pub const MAX_INTENSITY: f64 = 0.85;
    /// Lowest per-session volume ever prescribed
    pub const MIN_VOLUME: i64 = 6;
    /// Highest per-session volume ever prescribed
    pub const MAX_VOLUME: i64 = 24;
    /// Smallest week a caller may request
    pub const MIN_DAYS: i64 = 1;
    /// Largest week a caller may request
    pub const MAX_DAYS: i64 = 14;
    /// Days requested when the caller does not say
    pub const DEFAULT_DAYS: i64 = 7;
}
