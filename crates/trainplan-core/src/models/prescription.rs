// ABOUTME: Day prescriptions and exercise-set templates produced by the weekly planner
// ABOUTME: A prescription owns its set templates; rest days carry no intensity and no sets

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::training::DayType;

/// One prescribed movement: sets x reps at a target RPE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetTemplate {
    /// Movement name, e.g. "Bench Press"
    pub movement: String,
    /// Number of working sets
    pub target_sets: u32,
    /// Reps per set
    pub target_reps: u32,
    /// Rate of perceived exertion target (1-10 scale)
    pub target_rpe: f64,
}

impl SetTemplate {
    /// Build a template from its parts
    pub fn new(movement: impl Into<String>, target_sets: u32, target_reps: u32, target_rpe: f64) -> Self {
        Self {
            movement: movement.into(),
            target_sets,
            target_reps,
            target_rpe,
        }
    }
}

/// One synthesized calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPrescription {
    /// Calendar date the day falls on
    pub date: NaiveDate,
    /// Pattern label for the day
    pub day_type: DayType,
    /// Fraction of effort ceiling in `[0, 1]`; `None` on rest days
    pub target_intensity: Option<f64>,
    /// Hard-set count for the session; `0` on rest days
    pub target_volume: u32,
    /// Movement templates, replaced wholesale whenever the day is re-synthesized
    pub sets: Vec<SetTemplate>,
}

impl DayPrescription {
    /// A zero-effort day
    #[must_use]
    pub const fn rest(date: NaiveDate) -> Self {
        Self {
            date,
            day_type: DayType::Rest,
            target_intensity: None,
            target_volume: 0,
            sets: Vec::new(),
        }
    }

    /// Whether this day is a rest day
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        self.day_type.is_rest()
    }
}
