// ABOUTME: Adherence modulation from the seven days of logged workouts before a plan starts
// ABOUTME: Nudges volume and intensity by session count and blends base volume with history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adherence modulator
//!
//! The lookback window is the only place history influences a plan. Nothing is
//! carried between invocations: a signal is computed, consumed once, and dropped.

use serde::{Deserialize, Serialize};

use crate::plan_constants::adherence;

/// Summary of the lookback window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdherenceSignal {
    /// Training sessions logged in the window (0-7)
    pub session_count: u32,
    /// Mean stored `target_volume` over those sessions, `0.0` when there are none
    pub average_volume: f64,
}

impl AdherenceSignal {
    /// Signal for a window with no logged sessions
    #[must_use]
    pub const fn none() -> Self {
        Self {
            session_count: 0,
            average_volume: 0.0,
        }
    }

    /// Build a signal from the stored volumes of the sessions in the window
    #[must_use]
    pub fn from_volumes(volumes: &[i64]) -> Self {
        if volumes.is_empty() {
            return Self::none();
        }

        let total: i64 = volumes.iter().sum();
        Self {
            session_count: u32::try_from(volumes.len()).unwrap_or(u32::MAX),
            average_volume: total as f64 / volumes.len() as f64,
        }
    }

    /// Whether any history exists in the window
    #[must_use]
    pub fn has_history(&self) -> bool {
        self.average_volume > 0.0
    }
}

/// Outcome of modulating a base volume by adherence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdherenceModulation {
    /// Multiplier applied to volume
    pub volume_factor: f64,
    /// Added to base intensity before clamping
    pub intensity_adjustment: f64,
    /// Base volume after the history blend and the volume factor
    pub blended_volume: i64,
}

/// Modulate a base volume by the session count and average volume of the lookback window
///
/// Five or more sessions push the week up, two or fewer pull it down. When history
/// exists the base volume is blended 70/30 with the historical average before the
/// factor applies.
#[must_use]
pub fn modulate(session_count: u32, average_volume: f64, base_volume: i64) -> AdherenceModulation {
    let (volume_factor, intensity_adjustment) =
        if session_count >= adherence::HIGH_ADHERENCE_SESSIONS {
            (adherence::HIGH_VOLUME_FACTOR, adherence::INTENSITY_NUDGE)
        } else if session_count <= adherence::LOW_ADHERENCE_SESSIONS {
            (adherence::LOW_VOLUME_FACTOR, -adherence::INTENSITY_NUDGE)
        } else {
            (1.0, 0.0)
        };

    let base = base_volume as f64;
    let blended_volume = if average_volume > 0.0 {
        let blend = (base * adherence::BASE_VOLUME_WEIGHT
            + average_volume * adherence::HISTORY_VOLUME_WEIGHT)
            .round();
        (blend * volume_factor).round() as i64
    } else {
        (base * volume_factor).round() as i64
    };

    AdherenceModulation {
        volume_factor,
        intensity_adjustment,
        blended_volume,
    }
}

/// Modulate using a precomputed [`AdherenceSignal`]
#[must_use]
pub fn modulate_signal(signal: &AdherenceSignal, base_volume: i64) -> AdherenceModulation {
    modulate(signal.session_count, signal.average_volume, base_volume)
}
