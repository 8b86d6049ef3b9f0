// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, ports, routes, defaults, and environment lookups for trainplan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! This module organizes application constants by domain for better maintainability.

use std::env;

/// Service identifiers used in logs and token audiences
pub mod service_names {
    /// Server binary / service name
    pub const TRAINPLAN_SERVER: &str = "trainplan-server";
    /// JWT audience for plan API tokens
    pub const PLAN_API_AUDIENCE: &str = "trainplan-api";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// API routes
pub mod routes {
    /// Liveness route
    pub const HEALTH: &str = "/health";
    /// Readiness route
    pub const READY: &str = "/ready";
    /// Weekly plan generation and read-back
    pub const PLANS_WEEKLY: &str = "/api/plans/weekly";
    /// Stored goal for the calling user
    pub const PROFILE_GOAL: &str = "/api/profile/goal";
}

/// Fallback values when nothing is configured
pub mod defaults {
    /// Default SQLite database location
    pub const DATABASE_URL: &str = "sqlite:./data/trainplan.db";
    /// Default JWT lifetime in hours
    pub const JWT_EXPIRY_HOURS: i64 = 24;
    /// Default rest-day persistence policy
    pub const REST_DAY_POLICY: &str = "persist";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}

/// Limits applied to request handling
pub mod limits {
    /// Maximum request body accepted by the plan routes
    pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
    /// Connections kept by a file-backed SQLite pool
    pub const SQLITE_MAX_CONNECTIONS: u32 = 5;
}

/// Environment-based configuration lookups
pub mod env_config {
    use super::{defaults, env, ports};

    /// Get HTTP server port from environment or default
    #[must_use]
    pub fn http_port() -> String {
        env::var("HTTP_PORT").unwrap_or_else(|_| ports::DEFAULT_HTTP_PORT.to_string())
    }

    /// Get database URL from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.into())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| defaults::LOG_LEVEL.into())
    }

    /// Get deployment environment name
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
    }

    /// Get `JWT` signing secret if configured
    #[must_use]
    pub fn jwt_secret() -> Option<String> {
        env::var("JWT_SECRET").ok().filter(|s| !s.is_empty())
    }

    /// Get `JWT` expiry hours from environment or default
    #[must_use]
    pub fn jwt_expiry_hours() -> String {
        env::var("JWT_EXPIRY_HOURS").unwrap_or_else(|_| defaults::JWT_EXPIRY_HOURS.to_string())
    }

    /// Get rest-day persistence policy
    #[must_use]
    pub fn rest_day_policy() -> String {
        env::var("PLAN_REST_DAY_POLICY").unwrap_or_else(|_| defaults::REST_DAY_POLICY.into())
    }
}
