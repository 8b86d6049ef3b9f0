// ABOUTME: User profile database operations for the stored training goal
// ABOUTME: Provides get/set of the free-text goal a plan falls back to when none is supplied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use sqlx::Row;

impl Database {
    /// Get the stored goal text for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_goal(&self, user_id: &str) -> AppResult<Option<String>> {
        let row = sqlx::query(
            r"
            SELECT goal
            FROM user_profiles
            WHERE user_id = ?1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user goal: {e}")))?;

        Ok(row.and_then(|row| row.get::<Option<String>, _>("goal")))
    }

    /// Store the goal text for a user, creating the profile if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn set_user_goal(&self, user_id: &str, goal: &str) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_profiles (user_id, goal, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(user_id) DO UPDATE SET
                goal = ?2,
                updated_at = ?3
            ",
        )
        .bind(user_id)
        .bind(goal)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to set user goal: {e}")))?;

        Ok(())
    }
}
