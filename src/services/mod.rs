// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Hosts the weekly plan synthesizer shared by the HTTP routes and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold the business rules so the HTTP API and the command-line tool
//! produce identical plans.

/// Weekly plan generation with idempotent persistence
pub mod plan_synthesizer;

pub use plan_synthesizer::{
    DayResult, PlanRequest, RestDayPolicy, WeeklyPlan, WeeklyPlanSynthesizer,
};
