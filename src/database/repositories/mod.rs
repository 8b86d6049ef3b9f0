// ABOUTME: Repository traits for the workout store and the profile store
// ABOUTME: Lets the plan synthesizer run against SQLite or a test double
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository abstractions
//!
//! The synthesizer only ever talks to these traits. `SQLite` implementations wrap
//! [`Database`](crate::database::Database); tests substitute doubles to exercise
//! failure paths.

mod profile_repository;
mod workout_repository;

pub use profile_repository::ProfileRepositoryImpl;
pub use workout_repository::WorkoutRepositoryImpl;

use crate::database::{NewWorkout, WorkoutChanges, WorkoutRecord, WorkoutSetRecord};
use crate::errors::DatabaseError;
use async_trait::async_trait;
use chrono::NaiveDate;
use trainplan_core::models::SetTemplate;

/// Row store for workouts keyed by `(user_id, workout_date)` and their set templates
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Workouts with `from <= workout_date < to_exclusive`, oldest first
    async fn list_workouts_between(
        &self,
        user_id: &str,
        from: NaiveDate,
        to_exclusive: NaiveDate,
    ) -> Result<Vec<WorkoutRecord>, DatabaseError>;

    /// Point lookup by natural key
    async fn find_workout(
        &self,
        user_id: &str,
        workout_date: NaiveDate,
    ) -> Result<Option<WorkoutRecord>, DatabaseError>;

    /// Create a workout and return the stored row
    async fn insert_workout(&self, workout: &NewWorkout) -> Result<WorkoutRecord, DatabaseError>;

    /// Overwrite the mutable fields of a workout
    async fn update_workout(
        &self,
        workout_id: &str,
        changes: &WorkoutChanges,
    ) -> Result<(), DatabaseError>;

    /// Discard every set row of a workout and insert `sets` in order
    async fn replace_workout_sets(
        &self,
        workout_id: &str,
        sets: &[SetTemplate],
    ) -> Result<(), DatabaseError>;

    /// Set rows of a workout in position order
    async fn list_workout_sets(
        &self,
        workout_id: &str,
    ) -> Result<Vec<WorkoutSetRecord>, DatabaseError>;
}

/// Store for the per-user goal text
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The user's stored goal, if any
    async fn get_user_goal(&self, user_id: &str) -> Result<Option<String>, DatabaseError>;

    /// Store the user's goal
    async fn set_user_goal(&self, user_id: &str, goal: &str) -> Result<(), DatabaseError>;
}
