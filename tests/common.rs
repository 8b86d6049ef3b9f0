// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, auth, resources, and history seeding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `trainplan_server`

use anyhow::Result;
use chrono::NaiveDate;
use std::sync::{Arc, Once};
use trainplan_server::{
    auth::AuthManager,
    config::environment::{
        AuthConfig, CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, PlanConfig,
        ServerConfig,
    },
    database::{Database, NewWorkout, WorkoutChanges, WorkoutRecord},
    resources::ServerResources,
    services::plan_synthesizer::RestDayPolicy,
};

static INIT_LOGGER: Once = Once::new();

/// Secret shared by test token minting and the test auth manager
pub const TEST_JWT_SECRET: &str = "trainplan-test-secret-not-for-production";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Create test authentication manager
pub fn create_test_auth_manager() -> AuthManager {
    AuthManager::new(TEST_JWT_SECRET.as_bytes().to_vec(), 24)
}

/// Configuration equivalent to an empty environment, with a fixed secret
pub fn create_test_config(rest_day_policy: RestDayPolicy) -> ServerConfig {
    ServerConfig {
        http_port: 8081,
        log_level: LogLevel::Warn,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            auto_migrate: true,
        },
        auth: AuthConfig {
            jwt_secret: Some(TEST_JWT_SECRET.to_owned()),
            jwt_expiry_hours: 24,
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
        plan: PlanConfig { rest_day_policy },
    }
}

/// Full resource set over a fresh in-memory database
pub async fn create_test_resources() -> Result<(Arc<ServerResources>, Database)> {
    let database = create_test_database().await?;
    let resources = ServerResources::new(
        database.clone(),
        create_test_auth_manager(),
        Arc::new(create_test_config(RestDayPolicy::Persist)),
    );
    Ok((Arc::new(resources), database))
}

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Insert a logged session directly, bypassing the planner
pub async fn seed_workout(
    database: &Database,
    user_id: &str,
    workout_date: NaiveDate,
    workout_type: &str,
    target_volume: i64,
) -> WorkoutRecord {
    let rest = workout_type == "Rest";
    database
        .insert_workout(&NewWorkout {
            user_id: user_id.to_owned(),
            workout_date,
            changes: WorkoutChanges {
                workout_type: workout_type.to_owned(),
                target_intensity: if rest { None } else { Some(0.7) },
                target_volume,
                notes: None,
                goal_type: None,
                experience_level: None,
                plan_id: None,
            },
        })
        .await
        .expect("seed workout")
}
