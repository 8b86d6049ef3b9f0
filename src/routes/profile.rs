// ABOUTME: Profile goal route handlers for storing and reading a user's training goal
// ABOUTME: The stored goal is what plan generation falls back to when a request has none
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::routes;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::routes::resolve_user_id;
use crate::services::plan_synthesizer::require_user_id;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::put,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use trainplan_core::models::TrainingArchetype;
use trainplan_intelligence::classify;

/// Body of `PUT /api/profile/goal`
#[derive(Debug, Deserialize)]
struct GoalBody {
    #[serde(default)]
    user_id: Option<String>,
    goal: String,
}

#[derive(Debug, Default, Deserialize)]
struct GoalQuery {
    #[serde(default)]
    user_id: Option<String>,
}

/// Stored goal and the archetype it classifies to
#[derive(Debug, Serialize, Deserialize)]
pub struct GoalResponse {
    /// Owner
    pub user_id: String,
    /// Goal text; `None` when nothing is stored
    pub goal: Option<String>,
    /// Archetype of the goal; `None` when nothing is stored
    pub goal_type: Option<TrainingArchetype>,
}

/// Profile goal routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::PROFILE_GOAL,
                put(Self::handle_put_goal).get(Self::handle_get_goal),
            )
            .with_state(resources)
    }

    /// Handle storing a goal
    async fn handle_put_goal(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let request: GoalBody = serde_json::from_slice(&body)
            .map_err(|e| AppError::invalid_input(format!("Invalid goal payload: {e}")))?;
        let user_id = require_user_id(
            resolve_user_id(&resources, request.user_id, &headers).as_deref(),
        )?;

        let goal_type = resources
            .plan_synthesizer
            .store_goal(Some(&user_id), &request.goal)
            .await?;

        Ok((
            StatusCode::OK,
            Json(GoalResponse {
                user_id,
                goal: Some(request.goal.trim().to_owned()),
                goal_type: Some(goal_type),
            }),
        )
            .into_response())
    }

    /// Handle reading the stored goal
    async fn handle_get_goal(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<GoalQuery>,
    ) -> Result<Response, AppError> {
        let user_id = require_user_id(
            resolve_user_id(&resources, params.user_id, &headers).as_deref(),
        )?;

        let goal = resources
            .plan_synthesizer
            .stored_goal(Some(&user_id))
            .await?;
        let goal_type = goal.as_deref().map(classify);

        Ok((
            StatusCode::OK,
            Json(GoalResponse {
                user_id,
                goal,
                goal_type,
            }),
        )
            .into_response())
    }
}
