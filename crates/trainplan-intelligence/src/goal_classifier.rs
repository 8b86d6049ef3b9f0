// ABOUTME: Normalizes free-text or enumerated training goals into a training archetype
// ABOUTME: Case-insensitive ordered keyword matching; first matching group wins, else general
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use trainplan_core::models::TrainingArchetype;

/// Keyword groups checked in order against the lowercased goal text
///
/// Order matters: "strength endurance" is a strength goal.
const KEYWORD_GROUPS: [(&[&str], TrainingArchetype); 4] = [
    (&["strength", "strong"], TrainingArchetype::Strength),
    (&["endurance"], TrainingArchetype::Endurance),
    (&["recomp"], TrainingArchetype::Recomposition),
    (&["hypertrophy", "muscle"], TrainingArchetype::Hypertrophy),
];

/// Classify a raw goal string into a training archetype
///
/// Total over all input: empty, unknown, or unmatched text yields
/// [`TrainingArchetype::General`].
#[must_use]
pub fn classify(raw_goal: &str) -> TrainingArchetype {
    let goal = raw_goal.to_lowercase();

    KEYWORD_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| goal.contains(keyword)))
        .map_or(TrainingArchetype::General, |(_, archetype)| *archetype)
}
