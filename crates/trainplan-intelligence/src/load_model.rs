// ABOUTME: Base intensity and volume lookups per archetype and experience level
// ABOUTME: Pure stateless table with experience shifts and a training-frequency nudge

use trainplan_core::models::{ExperienceLevel, TrainingArchetype};

use crate::plan_constants::{base_intensity, base_volume, load_adjustments};

/// Base target intensity before adherence modulation and clamping
#[must_use]
pub fn base_intensity(archetype: TrainingArchetype, experience: ExperienceLevel) -> f64 {
    let base = match archetype {
        TrainingArchetype::Strength => base_intensity::STRENGTH,
        TrainingArchetype::Hypertrophy => base_intensity::HYPERTROPHY,
        TrainingArchetype::Endurance => base_intensity::ENDURANCE,
        TrainingArchetype::Recomposition => base_intensity::RECOMPOSITION,
        TrainingArchetype::General => base_intensity::GENERAL,
    };

    match experience {
        ExperienceLevel::Beginner => base - load_adjustments::EXPERIENCE_INTENSITY_SHIFT,
        ExperienceLevel::Intermediate => base,
        ExperienceLevel::Advanced => base + load_adjustments::EXPERIENCE_INTENSITY_SHIFT,
    }
}

/// Base hard-set volume per session, never below 6
#[must_use]
pub fn base_volume(
    archetype: TrainingArchetype,
    experience: ExperienceLevel,
    day_count: usize,
) -> i64 {
    let base = match archetype {
        TrainingArchetype::Strength => base_volume::STRENGTH,
        TrainingArchetype::Hypertrophy => base_volume::HYPERTROPHY,
        TrainingArchetype::Endurance => base_volume::ENDURANCE,
        TrainingArchetype::Recomposition => base_volume::RECOMPOSITION,
        TrainingArchetype::General => base_volume::GENERAL,
    };

    let experience_shift = match experience {
        ExperienceLevel::Beginner => -load_adjustments::EXPERIENCE_VOLUME_SHIFT,
        ExperienceLevel::Intermediate => 0,
        ExperienceLevel::Advanced => load_adjustments::EXPERIENCE_VOLUME_SHIFT,
    };

    let frequency_shift = if day_count >= load_adjustments::HIGH_FREQUENCY_DAYS {
        1
    } else if day_count <= load_adjustments::LOW_FREQUENCY_DAYS {
        -1
    } else {
        0
    };

    (base + experience_shift + frequency_shift).max(load_adjustments::MIN_BASE_VOLUME)
}
