// ABOUTME: Weekly plan route handlers: generate a week and read a stored week back
// ABOUTME: Lenient body parsing where malformed input falls back to defaults instead of 400
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly plan routes
//!
//! `POST /api/plans/weekly` never rejects a body: anything that is not a JSON
//! object is treated as `{}`, and each field that is missing or of the wrong
//! shape takes its default. The only request-level failure is a missing
//! identity, which answers 401.

use crate::constants::routes;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::routes::resolve_user_id;
use crate::services::plan_synthesizer::PlanRequest;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use trainplan_core::models::ExperienceLevel;

/// Fields of a plan request body, each already reduced to its usable form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyPlanBody {
    /// Explicit caller id
    pub user_id: Option<String>,
    /// First day of the plan
    pub start_date: Option<NaiveDate>,
    /// `days`, else `training_days`
    pub days: Option<i64>,
    /// Goal override
    pub goal: Option<String>,
    /// Experience level; unknown values become intermediate
    pub experience_level: ExperienceLevel,
    /// Plan tag
    pub plan_id: Option<String>,
}

impl WeeklyPlanBody {
    /// Parse a raw body, treating anything but a JSON object as empty
    #[must_use]
    pub fn from_bytes(body: &[u8]) -> Self {
        let map = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                if !body.is_empty() {
                    tracing::debug!(body.bytes = body.len(), "Unusable plan body; using defaults");
                }
                return Self::default();
            }
        };

        Self {
            user_id: string_field(&map, "user_id"),
            start_date: string_field(&map, "start_date").and_then(|s| parse_date(&s)),
            days: integer_field(&map, "days").or_else(|| integer_field(&map, "training_days")),
            goal: string_field(&map, "goal"),
            experience_level: string_field(&map, "experience_level")
                .map(|s| ExperienceLevel::from_str_or_default(&s))
                .unwrap_or_default(),
            plan_id: string_field(&map, "plan_id"),
        }
    }

    /// Convert into a synthesizer request with the resolved identity
    #[must_use]
    pub fn into_plan_request(self, user_id: Option<String>) -> PlanRequest {
        PlanRequest {
            user_id,
            start_date: self.start_date,
            days: self.days,
            goal: self.goal,
            experience_level: self.experience_level,
            plan_id: self.plan_id,
        }
    }
}

/// Query parameters for reading a stored week
#[derive(Debug, Default, Deserialize)]
struct WeekQuery {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    days: Option<String>,
}

/// Weekly plan routes
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::PLANS_WEEKLY,
                post(Self::handle_generate).get(Self::handle_read_week),
            )
            .with_state(resources)
    }

    /// Handle weekly plan generation
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let mut request = WeeklyPlanBody::from_bytes(&body);
        let user_id = resolve_user_id(&resources, request.user_id.take(), &headers);

        let plan = resources
            .plan_synthesizer
            .synthesize(&request.into_plan_request(user_id))
            .await?;

        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    /// Handle reading a stored week back
    async fn handle_read_week(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<WeekQuery>,
    ) -> Result<Response, AppError> {
        let user_id = resolve_user_id(&resources, params.user_id, &headers);
        let start_date = params.start_date.as_deref().and_then(parse_date);
        let days = params.days.as_deref().and_then(|d| d.trim().parse().ok());

        let week = resources
            .plan_synthesizer
            .read_week(user_id.as_deref(), start_date, days)
            .await?;

        Ok((StatusCode::OK, Json(week)).into_response())
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn integer_field(map: &Map<String, Value>, key: &str) -> Option<i64> {
    match map.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accept `YYYY-MM-DD`, or a timestamp whose first ten characters are one
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
