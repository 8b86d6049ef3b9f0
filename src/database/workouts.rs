// ABOUTME: Workout and set-template database operations
// ABOUTME: Range and point lookups, conflict-aware insert, in-place update, and set replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Database, DATE_FORMAT};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use trainplan_core::models::SetTemplate;
use uuid::Uuid;

/// A persisted workout row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Row id
    pub id: String,
    /// Owner
    pub user_id: String,
    /// Calendar date; unique per user
    pub workout_date: NaiveDate,
    /// Day-type label (`Push`, `Rest`, ...)
    pub workout_type: String,
    /// Fraction of effort ceiling; `None` on rest days
    pub target_intensity: Option<f64>,
    /// Hard-set count
    pub target_volume: i64,
    /// Coach-facing note
    pub notes: Option<String>,
    /// Archetype the day was planned for
    pub goal_type: Option<String>,
    /// Experience level the day was planned for
    pub experience_level: Option<String>,
    /// Optional plan tag
    pub plan_id: Option<String>,
    /// First write
    pub created_at: DateTime<Utc>,
    /// Last write
    pub updated_at: DateTime<Utc>,
}

/// Mutable fields of a workout, written on both insert and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutChanges {
    /// Day-type label
    pub workout_type: String,
    /// Fraction of effort ceiling; `None` on rest days
    pub target_intensity: Option<f64>,
    /// Hard-set count
    pub target_volume: i64,
    /// Coach-facing note
    pub notes: Option<String>,
    /// Archetype label
    pub goal_type: Option<String>,
    /// Experience level label
    pub experience_level: Option<String>,
    /// Plan tag; `None` leaves an existing tag untouched
    pub plan_id: Option<String>,
}

/// A workout to create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    /// Owner
    pub user_id: String,
    /// Calendar date
    pub workout_date: NaiveDate,
    /// Field values
    pub changes: WorkoutChanges,
}

/// A persisted set template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSetRecord {
    /// Order within the workout, starting at 0
    pub position: i64,
    /// Movement name
    pub movement: String,
    /// Working sets
    pub target_sets: i64,
    /// Reps per set
    pub target_reps: i64,
    /// Target RPE
    pub target_rpe: f64,
}

const WORKOUT_COLUMNS: &str = "id, user_id, workout_date, workout_type, target_intensity, \
     target_volume, notes, goal_type, experience_level, plan_id, created_at, updated_at";

impl Database {
    /// Workouts for a user with `from <= workout_date < to`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is unreadable
    pub async fn list_workouts_between(
        &self,
        user_id: &str,
        from: NaiveDate,
        to_exclusive: NaiveDate,
    ) -> AppResult<Vec<WorkoutRecord>> {
        let rows = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts \
             WHERE user_id = ?1 AND workout_date >= ?2 AND workout_date < ?3 \
             ORDER BY workout_date"
        ))
        .bind(user_id)
        .bind(from.format(DATE_FORMAT).to_string())
        .bind(to_exclusive.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;

        rows.iter().map(row_to_workout).collect()
    }

    /// The workout for a user on a date, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is unreadable
    pub async fn find_workout(
        &self,
        user_id: &str,
        workout_date: NaiveDate,
    ) -> AppResult<Option<WorkoutRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE user_id = ?1 AND workout_date = ?2"
        ))
        .bind(user_id)
        .bind(workout_date.format(DATE_FORMAT).to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to look up workout: {e}")))?;

        row.as_ref().map(row_to_workout).transpose()
    }

    /// Insert a workout
    ///
    /// If a row for the same user and date appeared since the caller looked, the
    /// insert turns into an update of that row instead of a duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn insert_workout(&self, workout: &NewWorkout) -> AppResult<WorkoutRecord> {
        let now = Utc::now();
        let changes = &workout.changes;

        let row = sqlx::query(
            r"
            INSERT INTO workouts (
                id, user_id, workout_date, workout_type, target_intensity, target_volume,
                notes, goal_type, experience_level, plan_id, created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)
            ON CONFLICT(user_id, workout_date) DO UPDATE SET
                workout_type = excluded.workout_type,
                target_intensity = excluded.target_intensity,
                target_volume = excluded.target_volume,
                notes = excluded.notes,
                goal_type = excluded.goal_type,
                experience_level = excluded.experience_level,
                plan_id = COALESCE(excluded.plan_id, workouts.plan_id),
                updated_at = excluded.updated_at
            RETURNING id, plan_id, created_at
            ",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&workout.user_id)
        .bind(workout.workout_date.format(DATE_FORMAT).to_string())
        .bind(&changes.workout_type)
        .bind(changes.target_intensity)
        .bind(changes.target_volume)
        .bind(&changes.notes)
        .bind(&changes.goal_type)
        .bind(&changes.experience_level)
        .bind(&changes.plan_id)
        .bind(now.to_rfc3339())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert workout: {e}")))?;

        Ok(WorkoutRecord {
            id: row.get("id"),
            user_id: workout.user_id.clone(),
            workout_date: workout.workout_date,
            workout_type: changes.workout_type.clone(),
            target_intensity: changes.target_intensity,
            target_volume: changes.target_volume,
            notes: changes.notes.clone(),
            goal_type: changes.goal_type.clone(),
            experience_level: changes.experience_level.clone(),
            plan_id: row.get("plan_id"),
            created_at: parse_timestamp(&row.get::<String, _>("created_at"))?,
            updated_at: now,
        })
    }

    /// Overwrite the mutable fields of a workout in place
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or no workout has this id
    pub async fn update_workout(&self, workout_id: &str, changes: &WorkoutChanges) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE workouts SET
                workout_type = ?1,
                target_intensity = ?2,
                target_volume = ?3,
                notes = ?4,
                goal_type = ?5,
                experience_level = ?6,
                plan_id = COALESCE(?7, plan_id),
                updated_at = ?8
            WHERE id = ?9
            ",
        )
        .bind(&changes.workout_type)
        .bind(changes.target_intensity)
        .bind(changes.target_volume)
        .bind(&changes.notes)
        .bind(&changes.goal_type)
        .bind(&changes.experience_level)
        .bind(&changes.plan_id)
        .bind(Utc::now().to_rfc3339())
        .bind(workout_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update workout: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Workout {workout_id}")));
        }
        Ok(())
    }

    /// Replace every set row of a workout with `sets`, in one transaction
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; the previous sets are then kept
    pub async fn replace_workout_sets(
        &self,
        workout_id: &str,
        sets: &[SetTemplate],
    ) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("DELETE FROM workout_sets WHERE workout_id = ?1")
            .bind(workout_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete workout sets: {e}")))?;

        for (position, set) in sets.iter().enumerate() {
            sqlx::query(
                r"
                INSERT INTO workout_sets (workout_id, position, movement, target_sets, target_reps, target_rpe)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
            )
            .bind(workout_id)
            .bind(i64::try_from(position).unwrap_or(i64::MAX))
            .bind(&set.movement)
            .bind(i64::from(set.target_sets))
            .bind(i64::from(set.target_reps))
            .bind(set.target_rpe)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert workout set: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit workout sets: {e}")))?;
        Ok(())
    }

    /// Set rows of a workout in position order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_workout_sets(&self, workout_id: &str) -> AppResult<Vec<WorkoutSetRecord>> {
        let rows = sqlx::query(
            r"
            SELECT position, movement, target_sets, target_reps, target_rpe
            FROM workout_sets
            WHERE workout_id = ?1
            ORDER BY position
            ",
        )
        .bind(workout_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list workout sets: {e}")))?;

        Ok(rows
            .iter()
            .map(|row| WorkoutSetRecord {
                position: row.get("position"),
                movement: row.get("movement"),
                target_sets: row.get("target_sets"),
                target_reps: row.get("target_reps"),
                target_rpe: row.get("target_rpe"),
            })
            .collect())
    }
}

fn row_to_workout(row: &SqliteRow) -> AppResult<WorkoutRecord> {
    let date_str: String = row.get("workout_date");
    let workout_date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
        AppError::database(format!("Stored workout_date '{date_str}' is invalid: {e}"))
    })?;

    Ok(WorkoutRecord {
        id: row.get("id"),
        user_id: row.get("user_id"),
        workout_date,
        workout_type: row.get("workout_type"),
        target_intensity: row.get("target_intensity"),
        target_volume: row.get("target_volume"),
        notes: row.get("notes"),
        goal_type: row.get("goal_type"),
        experience_level: row.get("experience_level"),
        plan_id: row.get("plan_id"),
        created_at: parse_timestamp(&row.get::<String, _>("created_at"))?,
        updated_at: parse_timestamp(&row.get::<String, _>("updated_at"))?,
    })
}

fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Stored timestamp '{raw}' is invalid: {e}")))
}
