// ABOUTME: Canonical seven-day split per archetype and modulo tiling to any day count
// ABOUTME: Short requests truncate the canonical week, long requests wrap around it

use trainplan_core::models::{DayType, TrainingArchetype};

use DayType::{Conditioning, Legs, Lower, Pull, Push, Rest, Upper};

/// Canonical week for an archetype
#[must_use]
pub const fn base_pattern(archetype: TrainingArchetype) -> [DayType; 7] {
    match archetype {
        TrainingArchetype::Strength => [Push, Pull, Legs, Rest, Push, Rest, Legs],
        TrainingArchetype::Hypertrophy => [Push, Pull, Legs, Rest, Upper, Lower, Rest],
        TrainingArchetype::Endurance => {
            [Conditioning, Upper, Conditioning, Rest, Lower, Conditioning, Rest]
        }
        TrainingArchetype::Recomposition => [Upper, Lower, Conditioning, Rest, Upper, Lower, Rest],
        TrainingArchetype::General => [Upper, Lower, Rest, Conditioning, Upper, Lower, Rest],
    }
}

/// Day-type sequence of exactly `day_count` labels
///
/// Entry `i` is `base[i % 7]`. Callers clamp `day_count` to `1..=14` first;
/// this function itself accepts any count, including zero.
#[must_use]
pub fn pattern_for(archetype: TrainingArchetype, day_count: usize) -> Vec<DayType> {
    let base = base_pattern(archetype);
    (0..day_count).map(|i| base[i % base.len()]).collect()
}
