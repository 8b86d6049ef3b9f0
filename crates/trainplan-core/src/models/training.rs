// ABOUTME: Training archetype, experience level, and day-type enumerations
// ABOUTME: Closed vocabularies with parsing and display used across planning and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Training archetype a goal is normalized into
///
/// Derived on every request from the raw goal text; never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingArchetype {
    /// Low-rep, high-intensity strength work
    Strength,
    /// Muscle growth: moderate intensity, high volume
    Hypertrophy,
    /// Conditioning-biased aerobic work
    Endurance,
    /// Body recomposition: mixed strength and conditioning
    Recomposition,
    /// Anything that did not match a keyword group
    General,
}

impl TrainingArchetype {
    /// Every archetype, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Strength,
        Self::Hypertrophy,
        Self::Endurance,
        Self::Recomposition,
        Self::General,
    ];

    /// Wire / storage name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Endurance => "endurance",
            Self::Recomposition => "recomposition",
            Self::General => "general",
        }
    }

    /// Title-cased name for notes and CLI output
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Hypertrophy => "Hypertrophy",
            Self::Endurance => "Endurance",
            Self::Recomposition => "Recomposition",
            Self::General => "General",
        }
    }
}

impl fmt::Display for TrainingArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingArchetype {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "endurance" => Ok(Self::Endurance),
            "recomposition" => Ok(Self::Recomposition),
            "general" => Ok(Self::General),
            other => Err(AppError::invalid_input(format!(
                "Unknown training archetype: {other}"
            ))),
        }
    }
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Less than roughly a year of consistent training
    Beginner,
    /// The default when the caller does not say
    #[default]
    Intermediate,
    /// Several years of structured training
    Advanced,
}

impl ExperienceLevel {
    /// Every level, in declaration order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire / storage name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse from string, falling back to `Intermediate` for anything unrecognized
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown experience level: {other}"
            ))),
        }
    }
}

/// Label for one day of the weekly pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    /// Chest, shoulders, triceps
    Push,
    /// Back and biceps
    Pull,
    /// Squat and hinge patterns
    Legs,
    /// Upper-body split day
    Upper,
    /// Lower-body split day
    Lower,
    /// Metabolic conditioning
    Conditioning,
    /// No training
    Rest,
}

impl DayType {
    /// Label as stored in `workouts.workout_type` and returned to clients
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
            Self::Upper => "Upper",
            Self::Lower => "Lower",
            Self::Conditioning => "Conditioning",
            Self::Rest => "Rest",
        }
    }

    /// Parse a stored label; `None` for anything outside the vocabulary
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        [
            Self::Push,
            Self::Pull,
            Self::Legs,
            Self::Upper,
            Self::Lower,
            Self::Conditioning,
            Self::Rest,
        ]
        .into_iter()
        .find(|day| day.label().eq_ignore_ascii_case(label))
    }

    /// Whether this is a zero-effort day
    #[must_use]
    pub const fn is_rest(self) -> bool {
        matches!(self, Self::Rest)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
