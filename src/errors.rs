// ABOUTME: Unified error handling for the trainplan server crate
// ABOUTME: Re-exports AppError, ErrorCode, and DatabaseError from trainplan-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Errors live in `trainplan-core` so the planning crate and the server share
//! one `AppError`; this module keeps `crate::errors::*` paths stable.

pub use trainplan_core::errors::database::DatabaseError;
pub use trainplan_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
