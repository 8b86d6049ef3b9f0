// ABOUTME: Preview command: runs the pure weekly planner and prints the prescription as JSON
// ABOUTME: Lets coaches inspect a week for hypothetical history without any storage

use anyhow::Result;
use trainplan_core::models::ExperienceLevel;
use trainplan_intelligence::{build_week, clamp_day_count, classify, AdherenceSignal, WeekInputs};

use super::start_date_or_today;

/// Arguments of `trainplan-cli preview`
pub struct PreviewArgs {
    pub goal: String,
    pub experience: String,
    pub days: Option<i64>,
    pub start_date: Option<String>,
    pub sessions: u32,
    pub average_volume: f64,
}

/// Print the week as pretty JSON on stdout
pub fn run(args: &PreviewArgs) -> Result<()> {
    let inputs = WeekInputs {
        archetype: classify(&args.goal),
        experience: ExperienceLevel::from_str_or_default(&args.experience),
        day_count: clamp_day_count(args.days),
        start_date: start_date_or_today(args.start_date.as_deref())?,
        adherence: AdherenceSignal {
            session_count: args.sessions.min(7),
            average_volume: args.average_volume.max(0.0),
        },
    };

    let week = build_week(&inputs);
    tracing::debug!(
        volume_factor = week.modulation.volume_factor,
        intensity_adjustment = week.modulation.intensity_adjustment,
        "Preview built"
    );

    println!("{}", serde_json::to_string_pretty(&week)?);
    Ok(())
}
