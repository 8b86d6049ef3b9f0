// ABOUTME: Generate command: runs the weekly plan synthesizer against the configured database
// ABOUTME: Prints the same JSON the HTTP API returns

use anyhow::{Context, Result};
use trainplan_core::models::ExperienceLevel;
use trainplan_server::{
    constants::env_config,
    database::Database,
    services::plan_synthesizer::{PlanRequest, RestDayPolicy, WeeklyPlanSynthesizer},
};

use super::start_date_or_today;

/// Arguments of `trainplan-cli generate`
pub struct GenerateArgs {
    pub user_id: String,
    pub goal: Option<String>,
    pub experience: String,
    pub days: Option<i64>,
    pub start_date: Option<String>,
    pub plan_id: Option<String>,
}

/// Generate and store the week, then print the result
pub async fn run(database_url: &str, args: GenerateArgs) -> Result<()> {
    let database = Database::new(database_url)
        .await
        .with_context(|| format!("Failed to open database {database_url}"))?;
    let synthesizer = WeeklyPlanSynthesizer::from_database(
        &database,
        RestDayPolicy::from_str_or_default(&env_config::rest_day_policy()),
    );

    let request = PlanRequest {
        user_id: Some(args.user_id),
        start_date: Some(start_date_or_today(args.start_date.as_deref())?),
        days: args.days,
        goal: args.goal,
        experience_level: ExperienceLevel::from_str_or_default(&args.experience),
        plan_id: args.plan_id,
    };

    let plan = synthesizer.synthesize(&request).await?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
