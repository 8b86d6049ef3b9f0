// ABOUTME: Main library entry point for the trainplan weekly training-plan service
// ABOUTME: Wires storage, authentication, plan synthesis, and the HTTP API together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Trainplan Server
//!
//! A small periodization scheduler exposed over HTTP. Given a user's goal,
//! experience level, and the last seven days of logged workouts, it produces a
//! day-by-day weekly prescription and reconciles it idempotently against the
//! workout store.
//!
//! ## Architecture
//!
//! - **`trainplan-core`**: error types, constants, domain models
//! - **`trainplan-intelligence`**: pure planning rules (classifier, patterns, load model, adherence, templates)
//! - **Database**: `SQLite` workout, set, and profile tables behind repository traits
//! - **Services**: the weekly plan synthesizer (history lookup and idempotent upsert)
//! - **Routes**: axum handlers for plan generation, week read-back, and goal storage
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use trainplan_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("trainplan configured with HTTP port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// JWT bearer-token identity
pub mod auth;

/// Environment-driven configuration
pub mod config;

/// Service constants re-exported from `trainplan-core`
pub mod constants;

/// `SQLite` persistence for workouts, set templates, and profiles
pub mod database;

/// Unified error handling re-exported from `trainplan-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Shared server state handed to every route
pub mod resources;

/// axum HTTP routes
pub mod routes;

/// Orchestration services built on the planning engine
pub mod services;
