// ABOUTME: SQLite implementation of the workout repository
// ABOUTME: Delegates to Database workout operations and maps failures to DatabaseError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WorkoutRepository;
use crate::database::{Database, NewWorkout, WorkoutChanges, WorkoutRecord, WorkoutSetRecord};
use crate::errors::{AppError, DatabaseError};
use async_trait::async_trait;
use chrono::NaiveDate;
use trainplan_core::models::SetTemplate;

/// `SQLite` implementation of `WorkoutRepository`
#[derive(Clone)]
pub struct WorkoutRepositoryImpl {
    db: Database,
}

impl WorkoutRepositoryImpl {
    /// Create a new `WorkoutRepository` over the given database
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

fn query_error(e: AppError) -> DatabaseError {
    DatabaseError::QueryError { context: e.message }
}

#[async_trait]
impl WorkoutRepository for WorkoutRepositoryImpl {
    async fn list_workouts_between(
        &self,
        user_id: &str,
        from: NaiveDate,
        to_exclusive: NaiveDate,
    ) -> Result<Vec<WorkoutRecord>, DatabaseError> {
        self.db
            .list_workouts_between(user_id, from, to_exclusive)
            .await
            .map_err(query_error)
    }

    async fn find_workout(
        &self,
        user_id: &str,
        workout_date: NaiveDate,
    ) -> Result<Option<WorkoutRecord>, DatabaseError> {
        self.db
            .find_workout(user_id, workout_date)
            .await
            .map_err(query_error)
    }

    async fn insert_workout(&self, workout: &NewWorkout) -> Result<WorkoutRecord, DatabaseError> {
        self.db.insert_workout(workout).await.map_err(query_error)
    }

    async fn update_workout(
        &self,
        workout_id: &str,
        changes: &WorkoutChanges,
    ) -> Result<(), DatabaseError> {
        self.db
            .update_workout(workout_id, changes)
            .await
            .map_err(query_error)
    }

    async fn replace_workout_sets(
        &self,
        workout_id: &str,
        sets: &[SetTemplate],
    ) -> Result<(), DatabaseError> {
        self.db
            .replace_workout_sets(workout_id, sets)
            .await
            .map_err(query_error)
    }

    async fn list_workout_sets(
        &self,
        workout_id: &str,
    ) -> Result<Vec<WorkoutSetRecord>, DatabaseError> {
        self.db
            .list_workout_sets(workout_id)
            .await
            .map_err(query_error)
    }
}
