// ABOUTME: HTTP tests for the plan, profile, and health routes through the full router
// ABOUTME: Verifies response shapes, identity resolution, body handling, and write failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;
mod helpers;

use async_trait::async_trait;
use chrono::NaiveDate;
use common::{create_test_auth_manager, create_test_resources, date};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::Arc;
use trainplan_core::models::SetTemplate;
use trainplan_server::{
    database::{
        repositories::{ProfileRepositoryImpl, WorkoutRepository, WorkoutRepositoryImpl},
        Database, NewWorkout, WorkoutChanges, WorkoutRecord, WorkoutSetRecord,
    },
    errors::DatabaseError,
    routes::build_router,
    services::plan_synthesizer::{RestDayPolicy, WeeklyPlanSynthesizer},
};

const PLANS: &str = "/api/plans/weekly";
const GOAL: &str = "/api/profile/goal";

#[tokio::test]
async fn test_generate_without_identity_is_unauthorized() {
    let (resources, _database) = create_test_resources().await.unwrap();
    let app = build_router(resources);

    let response = AxumTestRequest::post(PLANS)
        .json(&json!({ "goal": "strength" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 401);
    assert_eq!(response.json::<Value>(), json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn test_generate_returns_plan_shape() {
    let (resources, _database) = create_test_resources().await.unwrap();
    let app = build_router(resources);

    let response = AxumTestRequest::post(PLANS)
        .json(&json!({
            "user_id": "athlete-7",
            "start_date": "2026-03-02",
            "days": 7,
            "goal": "strength",
            "experience_level": "intermediate",
            "plan_id": "block-a"
        }))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["user_id"], "athlete-7");
    assert_eq!(body["start_date"], "2026-03-02");
    assert_eq!(body["days"], 7);
    assert_eq!(body["goal_type"], "strength");
    assert_eq!(body["experience_level"], "intermediate");
    assert_eq!(body["plan_id"], "block-a");

    let created = body["created"].as_array().unwrap();
    assert_eq!(created.len(), 7);
    assert_eq!(
        created[0],
        json!({
            "workout_date": "2026-03-02",
            "type": "Push",
            "target_intensity": 0.78,
            "target_volume": 10,
            "existed": false
        })
    );
    assert_eq!(created[3]["type"], "Rest");
    assert!(created[3]["target_intensity"].is_null());
    assert_eq!(created[3]["target_volume"], 0);
}

#[tokio::test]
async fn test_rerun_reports_existing_days() {
    let (resources, _database) = create_test_resources().await.unwrap();
    let body = json!({ "user_id": "u1", "start_date": "2026-03-02", "goal": "endurance" });

    let first = AxumTestRequest::post(PLANS)
        .json(&body)
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(first.status(), 200);

    let second: Value = AxumTestRequest::post(PLANS)
        .json(&body)
        .send(build_router(resources))
        .await
        .json();
    assert!(second["created"]
        .as_array()
        .unwrap()
        .iter()
        .all(|day| day["existed"] == true));
}

#[tokio::test]
async fn test_malformed_body_uses_defaults() {
    let (resources, _database) = create_test_resources().await.unwrap();
    let token = create_test_auth_manager().generate_token("u1").unwrap();

    let response = AxumTestRequest::post(PLANS)
        .bearer(&token)
        .raw_body("{this is not json")
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["user_id"], "u1");
    assert_eq!(body["days"], 7);
    assert_eq!(body["goal_type"], "general");
    assert_eq!(body["experience_level"], "intermediate");

    let response = AxumTestRequest::post(PLANS)
        .json(&json!({
            "user_id": "u2",
            "start_date": "not-a-date",
            "training_days": 30,
            "experience_level": "elite"
        }))
        .send(build_router(resources))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["days"], 14);
    assert_eq!(body["experience_level"], "intermediate");
}

#[tokio::test]
async fn test_bearer_token_identifies_caller() {
    let (resources, _database) = create_test_resources().await.unwrap();
    let token = create_test_auth_manager().generate_token("token-user").unwrap();

    let body: Value = AxumTestRequest::post(PLANS)
        .bearer(&token)
        .json(&json!({ "start_date": "2026-03-02", "days": 3 }))
        .send(build_router(resources.clone()))
        .await
        .json();
    assert_eq!(body["user_id"], "token-user");

    // An explicit id in the body wins over the token
    let body: Value = AxumTestRequest::post(PLANS)
        .bearer(&token)
        .json(&json!({ "user_id": "body-user", "days": 1 }))
        .send(build_router(resources.clone()))
        .await
        .json();
    assert_eq!(body["user_id"], "body-user");

    let response = AxumTestRequest::post(PLANS)
        .bearer("not.a.token")
        .json(&json!({ "days": 1 }))
        .send(build_router(resources))
        .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_read_week_returns_stored_rows_with_sets() {
    let (resources, _database) = create_test_resources().await.unwrap();
    AxumTestRequest::post(PLANS)
        .json(&json!({ "user_id": "u1", "start_date": "2026-03-02", "goal": "strength", "days": 4 }))
        .send(build_router(resources.clone()))
        .await;

    let response = AxumTestRequest::get(&format!(
        "{PLANS}?user_id=u1&start_date=2026-03-02&days=7"
    ))
    .send(build_router(resources.clone()))
    .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["user_id"], "u1");
    assert_eq!(body["days"], 7);
    let workouts = body["workouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 4);
    assert_eq!(workouts[0]["workout_type"], "Push");
    assert_eq!(workouts[0]["workout_date"], "2026-03-02");
    assert!(!workouts[0]["sets"].as_array().unwrap().is_empty());
    assert_eq!(workouts[3]["workout_type"], "Rest");
    assert!(workouts[3]["sets"].as_array().unwrap().is_empty());

    let response = AxumTestRequest::get(PLANS)
        .send(build_router(resources))
        .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_goal_round_trip_drives_generation() {
    let (resources, _database) = create_test_resources().await.unwrap();

    let response = AxumTestRequest::put(GOAL)
        .json(&json!({ "user_id": "u1", "goal": "Build muscle" }))
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["goal"], "Build muscle");
    assert_eq!(body["goal_type"], "hypertrophy");

    let body: Value = AxumTestRequest::get(&format!("{GOAL}?user_id=u1"))
        .send(build_router(resources.clone()))
        .await
        .json();
    assert_eq!(body["goal"], "Build muscle");
    assert_eq!(body["goal_type"], "hypertrophy");

    let body: Value = AxumTestRequest::post(PLANS)
        .json(&json!({ "user_id": "u1", "days": 2 }))
        .send(build_router(resources.clone()))
        .await
        .json();
    assert_eq!(body["goal_type"], "hypertrophy");

    let body: Value = AxumTestRequest::get(&format!("{GOAL}?user_id=nobody"))
        .send(build_router(resources))
        .await
        .json();
    assert!(body["goal"].is_null());
    assert!(body["goal_type"].is_null());
}

#[tokio::test]
async fn test_goal_rejects_bad_payloads() {
    let (resources, _database) = create_test_resources().await.unwrap();

    let response = AxumTestRequest::put(GOAL)
        .raw_body("[]")
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(response.status(), 400);

    let response = AxumTestRequest::put(GOAL)
        .json(&json!({ "user_id": "u1", "goal": "   " }))
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(response.status(), 400);

    let response = AxumTestRequest::put(GOAL)
        .json(&json!({ "goal": "strength" }))
        .send(build_router(resources))
        .await;
    assert_eq!(response.status(), 401);
}

/// Workout store whose insert fails on one date; everything else hits `SQLite`
struct InsertFailsOn {
    inner: WorkoutRepositoryImpl,
    failing_date: NaiveDate,
}

#[async_trait]
impl WorkoutRepository for InsertFailsOn {
    async fn list_workouts_between(
        &self,
        user_id: &str,
        from: NaiveDate,
        to_exclusive: NaiveDate,
    ) -> Result<Vec<WorkoutRecord>, DatabaseError> {
        self.inner
            .list_workouts_between(user_id, from, to_exclusive)
            .await
    }

    async fn find_workout(
        &self,
        user_id: &str,
        workout_date: NaiveDate,
    ) -> Result<Option<WorkoutRecord>, DatabaseError> {
        self.inner.find_workout(user_id, workout_date).await
    }

    async fn insert_workout(&self, workout: &NewWorkout) -> Result<WorkoutRecord, DatabaseError> {
        if workout.workout_date == self.failing_date {
            return Err(DatabaseError::QueryError {
                context: "disk I/O error".to_owned(),
            });
        }
        self.inner.insert_workout(workout).await
    }

    async fn update_workout(
        &self,
        workout_id: &str,
        changes: &WorkoutChanges,
    ) -> Result<(), DatabaseError> {
        self.inner.update_workout(workout_id, changes).await
    }

    async fn replace_workout_sets(
        &self,
        workout_id: &str,
        sets: &[SetTemplate],
    ) -> Result<(), DatabaseError> {
        self.inner.replace_workout_sets(workout_id, sets).await
    }

    async fn list_workout_sets(
        &self,
        workout_id: &str,
    ) -> Result<Vec<WorkoutSetRecord>, DatabaseError> {
        self.inner.list_workout_sets(workout_id).await
    }
}

fn synthesizer_failing_on(database: &Database, failing_date: NaiveDate) -> WeeklyPlanSynthesizer {
    WeeklyPlanSynthesizer::new(
        Arc::new(InsertFailsOn {
            inner: WorkoutRepositoryImpl::new(database.clone()),
            failing_date,
        }),
        Arc::new(ProfileRepositoryImpl::new(database.clone())),
        RestDayPolicy::Persist,
    )
}

#[tokio::test]
async fn test_write_failure_returns_server_error() {
    let (resources, database) = create_test_resources().await.unwrap();
    let resources = Arc::new(
        (*resources)
            .clone()
            .with_plan_synthesizer(synthesizer_failing_on(&database, date(2026, 3, 4))),
    );

    let response = AxumTestRequest::post(PLANS)
        .json(&json!({ "user_id": "u1", "start_date": "2026-03-02", "goal": "strength" }))
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object["error"].as_str().unwrap().contains("disk I/O error"));

    // Days before the failing one stay committed
    let stored = database
        .list_workouts_between("u1", date(2026, 3, 1), date(2026, 3, 10))
        .await
        .unwrap();
    let dates: Vec<NaiveDate> = stored.iter().map(|w| w.workout_date).collect();
    assert_eq!(dates, vec![date(2026, 3, 2), date(2026, 3, 3)]);
}

#[tokio::test]
async fn test_health_and_readiness() {
    let (resources, _database) = create_test_resources().await.unwrap();

    let body: Value = AxumTestRequest::get("/health")
        .send(build_router(resources.clone()))
        .await
        .json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "trainplan-server");

    let response = AxumTestRequest::get("/ready")
        .send(build_router(resources))
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.json::<Value>()["status"], "ready");
}
