// ABOUTME: Weekly plan synthesizer: resolves goal and history, builds the week, and reconciles storage
// ABOUTME: Query-before-write per day so re-running the same request updates rather than duplicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weekly Plan Synthesizer
//!
//! Orchestrates one plan request:
//!
//! 1. require a user id
//! 2. resolve the goal (override, else stored goal, else `"unknown"`) and classify it
//! 3. clamp the day count
//! 4. summarize the seven days before the start date
//! 5. build the week with the pure planner
//! 6. for every day, look the `(user, date)` row up, then update or insert it and
//!    replace its set templates
//!
//! Reads of history and the stored goal fail open to defaults. Every write, and
//! the per-day lookup that decides between update and insert, is fatal: the
//! request stops at the first failure and days already written stay written.

use crate::database::repositories::{
    ProfileRepository, ProfileRepositoryImpl, WorkoutRepository, WorkoutRepositoryImpl,
};
use crate::database::{Database, NewWorkout, WorkoutChanges, WorkoutRecord, WorkoutSetRecord};
use crate::errors::{AppError, AppResult, DatabaseError};
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use trainplan_core::models::{
    DayPrescription, DayType, ExperienceLevel, SetTemplate, TrainingArchetype,
};
use trainplan_intelligence::plan_constants::adherence::LOOKBACK_DAYS;
use trainplan_intelligence::{
    build_week, clamp_day_count, classify, describe_day, AdherenceSignal, WeekInputs,
    WeekPrescription,
};

/// Goal text used when neither the request nor the profile supplies one
pub const UNKNOWN_GOAL: &str = "unknown";

/// What happens to rest days on the write path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestDayPolicy {
    /// Upsert a `Rest` marker row (no intensity, zero volume, no sets)
    #[default]
    Persist,
    /// Only look the date up; never write a row for a rest day
    Skip,
}

impl RestDayPolicy {
    /// Parse `persist` / `skip`, defaulting to `Persist`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "skip" => Self::Skip,
            _ => Self::Persist,
        }
    }

    /// Configuration name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Persist => "persist",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for RestDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs of one plan request, after transport-level parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Caller identity; required
    pub user_id: Option<String>,
    /// First day of the plan; today (UTC) when absent
    pub start_date: Option<NaiveDate>,
    /// Requested day count before clamping; 7 when absent
    pub days: Option<i64>,
    /// Goal override; the stored goal is used when absent
    pub goal: Option<String>,
    /// Experience level
    pub experience_level: ExperienceLevel,
    /// Tag applied to every written row
    pub plan_id: Option<String>,
}

/// Outcome for one day of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayResult {
    /// Calendar date
    pub workout_date: NaiveDate,
    /// Day-type label
    #[serde(rename = "type")]
    pub day_type: DayType,
    /// `None` on rest days
    pub target_intensity: Option<f64>,
    /// `0` on rest days
    pub target_volume: u32,
    /// Whether a row for this date already existed
    pub existed: bool,
    /// Stored row id; `None` for a skipped rest day with no row
    #[serde(skip)]
    pub workout_id: Option<String>,
    /// Set templates written for the day
    #[serde(skip)]
    pub sets: Vec<SetTemplate>,
}

/// Response of a plan request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Resolved caller
    pub user_id: String,
    /// First day of the plan
    pub start_date: NaiveDate,
    /// Clamped day count
    pub days: usize,
    /// Classified archetype
    pub goal_type: TrainingArchetype,
    /// Experience level used
    pub experience_level: ExperienceLevel,
    /// Echo of the plan tag
    pub plan_id: Option<String>,
    /// One entry per day, in date order
    pub created: Vec<DayResult>,
}

/// A stored workout together with its set templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedWorkout {
    /// Workout row
    #[serde(flatten)]
    pub workout: WorkoutRecord,
    /// Set rows in position order
    pub sets: Vec<WorkoutSetRecord>,
}

/// Stored rows for a date window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedWeek {
    /// Owner
    pub user_id: String,
    /// First day of the window
    pub start_date: NaiveDate,
    /// Window length in days
    pub days: usize,
    /// Rows found, oldest first
    pub workouts: Vec<PersistedWorkout>,
}

/// Orchestrates plan generation against the workout and profile stores
#[derive(Clone)]
pub struct WeeklyPlanSynthesizer {
    workouts: Arc<dyn WorkoutRepository>,
    profiles: Arc<dyn ProfileRepository>,
    rest_day_policy: RestDayPolicy,
}

impl WeeklyPlanSynthesizer {
    /// Create a synthesizer over explicit repositories
    #[must_use]
    pub fn new(
        workouts: Arc<dyn WorkoutRepository>,
        profiles: Arc<dyn ProfileRepository>,
        rest_day_policy: RestDayPolicy,
    ) -> Self {
        Self {
            workouts,
            profiles,
            rest_day_policy,
        }
    }

    /// Create a synthesizer over the `SQLite` repositories of `database`
    #[must_use]
    pub fn from_database(database: &Database, rest_day_policy: RestDayPolicy) -> Self {
        Self::new(
            Arc::new(WorkoutRepositoryImpl::new(database.clone())),
            Arc::new(ProfileRepositoryImpl::new(database.clone())),
            rest_day_policy,
        )
    }

    /// Rest-day write policy in effect
    #[must_use]
    pub const fn rest_day_policy(&self) -> RestDayPolicy {
        self.rest_day_policy
    }

    /// Generate the week and reconcile it with storage
    ///
    /// # Errors
    ///
    /// - `AuthRequired` when the request carries no user id; nothing is written
    /// - `DatabaseError` for the first failed lookup or write; earlier days stay written
    pub async fn synthesize(&self, request: &PlanRequest) -> AppResult<WeeklyPlan> {
        let user_id = require_user_id(request.user_id.as_deref())?;
        let start_date = request
            .start_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let goal_text = self.resolve_goal(&user_id, request.goal.as_deref()).await;
        let archetype = classify(&goal_text);
        let day_count = clamp_day_count(request.days);
        let adherence = self.adherence_signal(&user_id, start_date).await;

        let week = build_week(&WeekInputs {
            archetype,
            experience: request.experience_level,
            day_count,
            start_date,
            adherence,
        });

        info!(
            user.id = %user_id,
            plan.archetype = %archetype,
            plan.experience = %request.experience_level,
            plan.days = day_count,
            plan.start_date = %start_date,
            adherence.sessions = adherence.session_count,
            "Synthesizing weekly plan"
        );

        let plan_id = request.plan_id.as_deref().filter(|id| !id.is_empty());
        let mut created = Vec::with_capacity(week.days.len());
        for day in &week.days {
            created.push(self.sync_day(&user_id, &week, day, plan_id).await?);
        }

        let existing = created.iter().filter(|day| day.existed).count();
        info!(
            user.id = %user_id,
            plan.days = created.len(),
            plan.existing_days = existing,
            "Weekly plan reconciled"
        );

        Ok(WeeklyPlan {
            user_id,
            start_date,
            days: day_count,
            goal_type: archetype,
            experience_level: request.experience_level,
            plan_id: plan_id.map(str::to_owned),
            created,
        })
    }

    /// Stored rows and set templates for `days` days starting at `start_date`
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a user id, or a database error if a read fails
    pub async fn read_week(
        &self,
        user_id: Option<&str>,
        start_date: Option<NaiveDate>,
        days: Option<i64>,
    ) -> AppResult<PersistedWeek> {
        let user_id = require_user_id(user_id)?;
        let start_date = start_date.unwrap_or_else(|| Utc::now().date_naive());
        let day_count = clamp_day_count(days);
        let end = start_date
            .checked_add_days(Days::new(day_count as u64))
            .unwrap_or(NaiveDate::MAX);

        let records = self
            .workouts
            .list_workouts_between(&user_id, start_date, end)
            .await?;

        let mut workouts = Vec::with_capacity(records.len());
        for workout in records {
            let sets = self.workouts.list_workout_sets(&workout.id).await?;
            workouts.push(PersistedWorkout { workout, sets });
        }

        Ok(PersistedWeek {
            user_id,
            start_date,
            days: day_count,
            workouts,
        })
    }

    /// Store the goal a later request falls back to; returns its archetype
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a user id, `InvalidInput` for blank goal
    /// text, or a database error if the write fails
    pub async fn store_goal(&self, user_id: Option<&str>, goal: &str) -> AppResult<TrainingArchetype> {
        let user_id = require_user_id(user_id)?;
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(AppError::invalid_input("goal must not be empty"));
        }

        self.profiles.set_user_goal(&user_id, goal).await?;
        info!(user.id = %user_id, goal = %goal, "Stored user goal");
        Ok(classify(goal))
    }

    /// The stored goal text for a user
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a user id, or a database error if the read fails
    pub async fn stored_goal(&self, user_id: Option<&str>) -> AppResult<Option<String>> {
        let user_id = require_user_id(user_id)?;
        Ok(self.profiles.get_user_goal(&user_id).await?)
    }

    async fn resolve_goal(&self, user_id: &str, override_goal: Option<&str>) -> String {
        if let Some(goal) = override_goal.map(str::trim).filter(|g| !g.is_empty()) {
            return goal.to_owned();
        }

        match self.profiles.get_user_goal(user_id).await {
            Ok(Some(goal)) if !goal.trim().is_empty() => goal,
            Ok(_) => UNKNOWN_GOAL.to_owned(),
            Err(e) => {
                warn!(user.id = %user_id, error = %e, "Goal lookup failed; planning for an unknown goal");
                UNKNOWN_GOAL.to_owned()
            }
        }
    }

    async fn adherence_signal(&self, user_id: &str, start_date: NaiveDate) -> AdherenceSignal {
        let from = start_date
            .checked_sub_days(Days::new(LOOKBACK_DAYS.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN);

        match self
            .workouts
            .list_workouts_between(user_id, from, start_date)
            .await
        {
            Ok(records) => {
                let volumes: Vec<i64> = records
                    .iter()
                    .filter(|record| !is_rest_marker(record))
                    .map(|record| record.target_volume)
                    .collect();
                let signal = AdherenceSignal::from_volumes(&volumes);
                debug!(
                    user.id = %user_id,
                    adherence.sessions = signal.session_count,
                    adherence.average_volume = signal.average_volume,
                    "Computed adherence signal"
                );
                signal
            }
            Err(e) => {
                warn!(user.id = %user_id, error = %e, "History lookup failed; assuming no recent sessions");
                AdherenceSignal::none()
            }
        }
    }

    async fn sync_day(
        &self,
        user_id: &str,
        week: &WeekPrescription,
        day: &DayPrescription,
        plan_id: Option<&str>,
    ) -> AppResult<DayResult> {
        let existing = self
            .workouts
            .find_workout(user_id, day.date)
            .await
            .map_err(|e| fatal("look up", user_id, day.date, e))?;
        let existed = existing.is_some();

        if day.is_rest() && self.rest_day_policy == RestDayPolicy::Skip {
            return Ok(day_result(day, existed, existing.map(|record| record.id)));
        }

        let changes = WorkoutChanges {
            workout_type: day.day_type.label().to_owned(),
            target_intensity: day.target_intensity,
            target_volume: i64::from(day.target_volume),
            notes: Some(describe_day(week.archetype, day)),
            goal_type: Some(week.archetype.as_str().to_owned()),
            experience_level: Some(week.experience.as_str().to_owned()),
            plan_id: plan_id.map(str::to_owned),
        };

        let workout_id = if let Some(record) = existing {
            self.workouts
                .update_workout(&record.id, &changes)
                .await
                .map_err(|e| fatal("update", user_id, day.date, e))?;
            record.id
        } else {
            let new_workout = NewWorkout {
                user_id: user_id.to_owned(),
                workout_date: day.date,
                changes,
            };
            self.workouts
                .insert_workout(&new_workout)
                .await
                .map_err(|e| fatal("insert", user_id, day.date, e))?
                .id
        };

        // Rest days get an empty list so sets left from an earlier training day disappear
        self.workouts
            .replace_workout_sets(&workout_id, &day.sets)
            .await
            .map_err(|e| fatal("replace sets of", user_id, day.date, e))?;

        debug!(
            user.id = %user_id,
            workout.date = %day.date,
            workout.id = %workout_id,
            workout.existed = existed,
            "Synchronized plan day"
        );

        Ok(day_result(day, existed, Some(workout_id)))
    }
}

/// Require a non-blank user id
///
/// # Errors
///
/// Returns `AuthRequired` (401 `Unauthorized`) when `candidate` is absent or blank
pub fn require_user_id(candidate: Option<&str>) -> AppResult<String> {
    candidate
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .ok_or_else(AppError::auth_required)
}

fn is_rest_marker(record: &WorkoutRecord) -> bool {
    DayType::from_label(&record.workout_type).is_some_and(DayType::is_rest)
}

fn day_result(day: &DayPrescription, existed: bool, workout_id: Option<String>) -> DayResult {
    DayResult {
        workout_date: day.date,
        day_type: day.day_type,
        target_intensity: day.target_intensity,
        target_volume: day.target_volume,
        existed,
        workout_id,
        sets: day.sets.clone(),
    }
}

fn fatal(action: &str, user_id: &str, date: NaiveDate, e: DatabaseError) -> AppError {
    error!(
        user.id = %user_id,
        workout.date = %date,
        error = %e,
        "Failed to {action} workout; aborting plan"
    );
    e.into()
}
