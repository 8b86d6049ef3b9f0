// ABOUTME: Centralized resource container for dependency injection into route handlers
// ABOUTME: Holds the database, auth manager, configuration, and plan synthesizer behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup and shared by every route through axum state.

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::services::plan_synthesizer::WeeklyPlanSynthesizer;
use std::sync::Arc;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Workout store
    pub database: Arc<Database>,
    /// Bearer-token validation
    pub auth_manager: Arc<AuthManager>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Plan orchestration over the workout store
    pub plan_synthesizer: Arc<WeeklyPlanSynthesizer>,
}

impl ServerResources {
    /// Build resources, wiring the synthesizer to `database` with the configured rest-day policy
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: Arc<ServerConfig>) -> Self {
        let plan_synthesizer = Arc::new(WeeklyPlanSynthesizer::from_database(
            &database,
            config.plan.rest_day_policy,
        ));

        Self {
            database: Arc::new(database),
            auth_manager: Arc::new(auth_manager),
            config,
            plan_synthesizer,
        }
    }

    /// Replace the synthesizer, e.g. with one over test-double repositories
    #[must_use]
    pub fn with_plan_synthesizer(mut self, plan_synthesizer: WeeklyPlanSynthesizer) -> Self {
        self.plan_synthesizer = Arc::new(plan_synthesizer);
        self
    }
}
