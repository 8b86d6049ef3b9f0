// ABOUTME: SQLite database management for workouts, set templates, and user profiles
// ABOUTME: Owns the connection pool and creates the schema on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! One workout row per user per calendar date, a replaceable list of set
//! templates per workout, and one stored goal per user. Dates are stored as
//! `YYYY-MM-DD` text so range queries compare lexicographically.

mod profiles;
mod workouts;

/// Repository traits decoupling the synthesizer from `SQLite`
pub mod repositories;

pub use workouts::{NewWorkout, WorkoutChanges, WorkoutRecord, WorkoutSetRecord};

use crate::constants::limits;
use crate::errors::{AppError, AppResult, DatabaseError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

/// Date format used for every stored calendar date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database manager for the workout store
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open a database and create the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or schema
    /// creation fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let db = Self::connect(database_url).await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Open a database without touching the schema
    ///
    /// In-memory URLs get a single pooled connection that never expires, so every
    /// query sees the same database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the connection fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let is_memory = database_url.contains(":memory:");
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(limits::SQLITE_MAX_CONNECTIONS)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(DatabaseError::from)?;

        info!(database.memory = is_memory, "Database connected");
        Ok(Self { pool })
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Round-trip a trivial query; used by the readiness probe
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot serve a query
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
        Ok(())
    }

    /// Create all tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_workouts().await?;
        self.migrate_profiles().await?;
        debug!("Schema migration complete");
        Ok(())
    }

    async fn migrate_workouts(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                workout_date TEXT NOT NULL,
                workout_type TEXT NOT NULL,
                target_intensity REAL,
                target_volume INTEGER NOT NULL DEFAULT 0,
                notes TEXT,
                goal_type TEXT,
                experience_level TEXT,
                plan_id TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE(user_id, workout_date)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| migration_error("workouts", &e))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_sets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_id TEXT NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                movement TEXT NOT NULL,
                target_sets INTEGER NOT NULL,
                target_reps INTEGER NOT NULL,
                target_rpe REAL NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| migration_error("workout_sets", &e))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_sets_workout ON workout_sets(workout_id, position)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| migration_error("idx_workout_sets_workout", &e))?;

        Ok(())
    }

    async fn migrate_profiles(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_profiles (
                user_id TEXT PRIMARY KEY,
                goal TEXT,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| migration_error("user_profiles", &e))?;

        Ok(())
    }
}

fn migration_error(object: &str, error: &sqlx::Error) -> AppError {
    DatabaseError::MigrationError {
        context: format!("{object}: {error}"),
    }
    .into()
}
