// ABOUTME: Route module organization for the trainplan HTTP API
// ABOUTME: Assembles health, plan, and profile routes with CORS, body limit, and tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module holds only route definitions and thin handlers that
//! delegate to the plan synthesizer.

/// Health check and readiness routes
pub mod health;
/// Weekly plan generation and read-back routes
pub mod plans;
/// Stored goal routes
pub mod profile;

pub use health::HealthRoutes;
pub use plans::PlanRoutes;
pub use profile::ProfileRoutes;

use crate::constants::limits;
use crate::middleware::{make_request_span, setup_cors};
use crate::resources::ServerResources;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderMap;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(PlanRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(resources))
        .layer(DefaultBodyLimit::max(limits::MAX_REQUEST_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
}

/// Caller identity: an explicit non-blank id wins, else the bearer token's subject
pub(crate) fn resolve_user_id(
    resources: &ServerResources,
    explicit: Option<String>,
    headers: &HeaderMap,
) -> Option<String> {
    explicit
        .filter(|id| !id.trim().is_empty())
        .or_else(|| resources.auth_manager.extract_user_id(headers))
}
