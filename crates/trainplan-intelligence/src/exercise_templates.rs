// ABOUTME: Fixed movement templates per day type, specialized by experience level
// ABOUTME: Per-movement set-count exceptions encode coaching judgment rather than a formula

use trainplan_core::models::{DayType, ExperienceLevel, SetTemplate};

/// Baseline template: movement, sets, reps, RPE
type Baseline = (&'static str, u32, u32, f64);

const PUSH: [Baseline; 3] = [
    ("Bench Press", 4, 6, 8.0),
    ("Overhead Press", 3, 8, 7.5),
    ("Triceps Dip", 3, 10, 7.0),
];

const PULL: [Baseline; 3] = [
    ("Deadlift", 3, 5, 8.0),
    ("Barbell Row", 4, 8, 7.5),
    ("Pull-Up", 3, 8, 7.5),
];

const LEGS: [Baseline; 3] = [
    ("Back Squat", 4, 6, 8.0),
    ("Romanian Deadlift", 3, 8, 7.5),
    ("Walking Lunge", 3, 10, 7.0),
];

const UPPER: [Baseline; 3] = [
    ("Incline Dumbbell Press", 3, 10, 7.5),
    ("Chin-Up", 3, 8, 7.5),
    ("Lateral Raise", 3, 12, 7.0),
];

const LOWER: [Baseline; 3] = [
    ("Front Squat", 3, 6, 7.5),
    ("Hip Thrust", 3, 10, 7.5),
    ("Standing Calf Raise", 3, 15, 7.0),
];

const CONDITIONING: [Baseline; 2] = [("Kettlebell Swing", 4, 15, 7.0), ("Burpee", 3, 12, 7.0)];

/// Set-count exception for one movement at one experience level
struct SetException {
    day_type: DayType,
    movement: &'static str,
    experience: ExperienceLevel,
    delta: i32,
}

/// Every experience-specific deviation from the baselines
///
/// Anchored to named movements; new movements get no adjustment until listed here.
const SET_EXCEPTIONS: [SetException; 8] = [
    SetException {
        day_type: DayType::Push,
        movement: "Bench Press",
        experience: ExperienceLevel::Advanced,
        delta: 1,
    },
    SetException {
        day_type: DayType::Push,
        movement: "Triceps Dip",
        experience: ExperienceLevel::Beginner,
        delta: -1,
    },
    SetException {
        day_type: DayType::Pull,
        movement: "Deadlift",
        experience: ExperienceLevel::Beginner,
        delta: -1,
    },
    SetException {
        day_type: DayType::Pull,
        movement: "Pull-Up",
        experience: ExperienceLevel::Advanced,
        delta: 1,
    },
    SetException {
        day_type: DayType::Legs,
        movement: "Back Squat",
        experience: ExperienceLevel::Advanced,
        delta: 1,
    },
    SetException {
        day_type: DayType::Legs,
        movement: "Romanian Deadlift",
        experience: ExperienceLevel::Beginner,
        delta: -1,
    },
    SetException {
        day_type: DayType::Lower,
        movement: "Front Squat",
        experience: ExperienceLevel::Beginner,
        delta: -1,
    },
    SetException {
        day_type: DayType::Conditioning,
        movement: "Kettlebell Swing",
        experience: ExperienceLevel::Advanced,
        delta: 1,
    },
];

fn baselines(day_type: DayType) -> &'static [Baseline] {
    match day_type {
        DayType::Push => &PUSH,
        DayType::Pull => &PULL,
        DayType::Legs => &LEGS,
        DayType::Upper => &UPPER,
        DayType::Lower => &LOWER,
        DayType::Conditioning => &CONDITIONING,
        DayType::Rest => &[],
    }
}

fn set_delta(day_type: DayType, movement: &str, experience: ExperienceLevel) -> i32 {
    SET_EXCEPTIONS
        .iter()
        .filter(|e| e.day_type == day_type && e.movement == movement && e.experience == experience)
        .map(|e| e.delta)
        .sum()
}

/// Ordered movement templates for a day; empty for rest days
#[must_use]
pub fn templates_for(day_type: DayType, experience: ExperienceLevel) -> Vec<SetTemplate> {
    baselines(day_type)
        .iter()
        .map(|&(movement, sets, reps, rpe)| {
            let adjusted = sets.saturating_add_signed(set_delta(day_type, movement, experience));
            SetTemplate::new(movement, adjusted.max(1), reps, rpe)
        })
        .collect()
}

/// Templates for a stored day-type label; empty for rest and unrecognized labels
#[must_use]
pub fn templates_for_label(label: &str, experience: ExperienceLevel) -> Vec<SetTemplate> {
    DayType::from_label(label).map_or_else(Vec::new, |day_type| templates_for(day_type, experience))
}
