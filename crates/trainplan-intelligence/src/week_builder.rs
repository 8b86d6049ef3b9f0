// ABOUTME: Combines pattern, load model, adherence, and templates into one weekly prescription
// ABOUTME: Pure and deterministic: identical inputs always produce an identical week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly prescription builder
//!
//! This is the storage-free half of plan synthesis. The server layers identity
//! resolution, history lookup, and idempotent persistence on top of it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trainplan_core::models::{DayPrescription, ExperienceLevel, TrainingArchetype};

use crate::adherence::{modulate_signal, AdherenceModulation, AdherenceSignal};
use crate::exercise_templates::templates_for;
use crate::load_model::{base_intensity, base_volume};
use crate::pattern_library::pattern_for;
use crate::plan_constants::prescription_bounds;

/// Everything the pure planner needs for one week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekInputs {
    /// Classified goal
    pub archetype: TrainingArchetype,
    /// Caller's experience level
    pub experience: ExperienceLevel,
    /// Number of days to plan, already clamped with [`clamp_day_count`]
    pub day_count: usize,
    /// First calendar day of the plan
    pub start_date: NaiveDate,
    /// Lookback window summary
    pub adherence: AdherenceSignal,
}

/// A fully computed week, before persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPrescription {
    /// Classified goal
    pub archetype: TrainingArchetype,
    /// Caller's experience level
    pub experience: ExperienceLevel,
    /// Intensity from the load model, before adherence and clamping
    pub base_intensity: f64,
    /// Volume from the load model, before adherence and clamping
    pub base_volume: i64,
    /// Adherence outcome applied to every training day
    pub modulation: AdherenceModulation,
    /// One entry per requested day, in date order
    pub days: Vec<DayPrescription>,
}

/// Clamp a requested day count to `1..=14`, defaulting to 7 when absent
#[must_use]
pub fn clamp_day_count(requested: Option<i64>) -> usize {
    let days = requested
        .unwrap_or(prescription_bounds::DEFAULT_DAYS)
        .clamp(prescription_bounds::MIN_DAYS, prescription_bounds::MAX_DAYS);
    usize::try_from(days).unwrap_or(1)
}

/// Final intensity for a training day: clamped to `[0.55, 0.85]`, two decimals
#[must_use]
pub fn training_intensity(base_intensity: f64, intensity_adjustment: f64) -> f64 {
    let clamped = (base_intensity + intensity_adjustment).clamp(
        prescription_bounds::MIN_INTENSITY,
        prescription_bounds::MAX_INTENSITY,
    );
    (clamped * 100.0).round() / 100.0
}

/// Final volume for a training day: clamped to `[6, 24]`
#[must_use]
pub fn training_volume(blended_volume: i64) -> u32 {
    let clamped = blended_volume.clamp(
        prescription_bounds::MIN_VOLUME,
        prescription_bounds::MAX_VOLUME,
    );
    u32::try_from(clamped).unwrap_or(0)
}

/// Build the week for the given inputs
///
/// An empty lookback counts as zero sessions and lands in the low-adherence
/// band, so a first week runs below base load (intermediate strength: 0.78 / 10).
#[must_use]
pub fn build_week(inputs: &WeekInputs) -> WeekPrescription {
    let pattern = pattern_for(inputs.archetype, inputs.day_count);
    let base_intensity = base_intensity(inputs.archetype, inputs.experience);
    let base_volume = base_volume(inputs.archetype, inputs.experience, inputs.day_count);
    let modulation = modulate_signal(&inputs.adherence, base_volume);

    let target_intensity = training_intensity(base_intensity, modulation.intensity_adjustment);
    let target_volume = training_volume(modulation.blended_volume);

    let days = inputs
        .start_date
        .iter_days()
        .zip(pattern)
        .map(|(date, day_type)| {
            if day_type.is_rest() {
                DayPrescription::rest(date)
            } else {
                DayPrescription {
                    date,
                    day_type,
                    target_intensity: Some(target_intensity),
                    target_volume,
                    sets: templates_for(day_type, inputs.experience),
                }
            }
        })
        .collect();

    tracing::debug!(
        plan.archetype = %inputs.archetype,
        plan.experience = %inputs.experience,
        plan.days = inputs.day_count,
        plan.base_volume = base_volume,
        plan.blended_volume = modulation.blended_volume,
        "Built weekly prescription"
    );

    WeekPrescription {
        archetype: inputs.archetype,
        experience: inputs.experience,
        base_intensity,
        base_volume,
        modulation,
        days,
    }
}

/// Coach-facing note stored alongside a persisted day
#[must_use]
pub fn describe_day(archetype: TrainingArchetype, day: &DayPrescription) -> String {
    match day.target_intensity {
        Some(intensity) if !day.is_rest() => format!(
            "{} week: {} day at {:.0}% effort, {} hard sets",
            archetype.display_name(),
            day.day_type,
            intensity * 100.0,
            day.target_volume
        ),
        _ => format!("{} week: rest day", archetype.display_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainplan_core::models::DayType;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn inputs(experience: ExperienceLevel, adherence: AdherenceSignal) -> WeekInputs {
        WeekInputs {
            archetype: TrainingArchetype::Strength,
            experience,
            day_count: 7,
            start_date: start(),
            adherence,
        }
    }

    #[test]
    fn test_clamp_day_count() {
        assert_eq!(clamp_day_count(None), 7);
        assert_eq!(clamp_day_count(Some(0)), 1);
        assert_eq!(clamp_day_count(Some(-3)), 1);
        assert_eq!(clamp_day_count(Some(5)), 5);
        assert_eq!(clamp_day_count(Some(30)), 14);
    }

    #[test]
    fn test_intensity_clamp() {
        assert!((training_intensity(0.85, 0.02) - 0.85).abs() < f64::EPSILON);
        assert!((training_intensity(0.55, -0.02) - 0.55).abs() < f64::EPSILON);
        assert!((training_intensity(0.80, -0.02) - 0.78).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strength_week_without_history() {
        let week = build_week(&inputs(ExperienceLevel::Intermediate, AdherenceSignal::none()));

        let types: Vec<DayType> = week.days.iter().map(|d| d.day_type).collect();
        assert_eq!(
            types,
            [
                DayType::Push,
                DayType::Pull,
                DayType::Legs,
                DayType::Rest,
                DayType::Push,
                DayType::Rest,
                DayType::Legs
            ]
        );

        // 0.80 - 0.02 (no sessions logged); round((10 + 1) * 0.9) = 10
        for day in week.days.iter().filter(|d| !d.is_rest()) {
            assert_eq!(day.target_intensity, Some(0.78));
            assert_eq!(day.target_volume, 10);
            assert!(!day.sets.is_empty());
        }
    }

    #[test]
    fn test_advanced_strength_week_without_history() {
        let week = build_week(&inputs(ExperienceLevel::Advanced, AdherenceSignal::none()));

        // 0.85 - 0.02; round((10 + 2 + 1) * 0.9) = round(11.7) = 12
        let push = &week.days[0];
        assert_eq!(push.target_intensity, Some(0.83));
        assert_eq!(push.target_volume, 12);
    }

    #[test]
    fn test_neutral_history_keeps_base_load() {
        let week = build_week(&inputs(
            ExperienceLevel::Intermediate,
            AdherenceSignal::from_volumes(&[11, 11, 11]),
        ));

        // Three sessions: neutral. round(11 * 0.7 + 11 * 0.3) = 11
        assert_eq!(week.days[0].target_intensity, Some(0.80));
        assert_eq!(week.days[0].target_volume, 11);
    }

    #[test]
    fn test_rest_days_are_zero_effort() {
        let week = build_week(&inputs(
            ExperienceLevel::Advanced,
            AdherenceSignal::from_volumes(&[12; 6]),
        ));

        for day in week.days.iter().filter(|d| d.is_rest()) {
            assert_eq!(day.target_intensity, None);
            assert_eq!(day.target_volume, 0);
            assert!(day.sets.is_empty());
        }
    }

    #[test]
    fn test_dates_are_consecutive() {
        let mut week_inputs = inputs(ExperienceLevel::Beginner, AdherenceSignal::none());
        week_inputs.day_count = 14;
        let week = build_week(&week_inputs);

        assert_eq!(week.days.len(), 14);
        assert_eq!(week.days[0].date, start());
        assert_eq!(week.days[13].date, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
        assert_eq!(week.days[7].day_type, week.days[0].day_type);
    }

    #[test]
    fn test_intensity_always_within_bounds() {
        for archetype in TrainingArchetype::ALL {
            for experience in ExperienceLevel::ALL {
                for sessions in 0..=7_i64 {
                    let volumes = vec![14; usize::try_from(sessions).unwrap()];
                    let week = build_week(&WeekInputs {
                        archetype,
                        experience,
                        day_count: 7,
                        start_date: start(),
                        adherence: AdherenceSignal::from_volumes(&volumes),
                    });
                    for day in &week.days {
                        if let Some(intensity) = day.target_intensity {
                            assert!((0.55..=0.85).contains(&intensity));
                            assert!((6..=24).contains(&day.target_volume));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_describe_day() {
        let week = build_week(&inputs(ExperienceLevel::Intermediate, AdherenceSignal::none()));
        assert_eq!(
            describe_day(TrainingArchetype::Strength, &week.days[0]),
            "Strength week: Push day at 78% effort, 10 hard sets"
        );
        assert_eq!(
            describe_day(TrainingArchetype::Strength, &week.days[3]),
            "Strength week: rest day"
        );
    }
}
