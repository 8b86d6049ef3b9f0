// ABOUTME: Weekly periodization engine: goal classification through finished weekly prescription
// ABOUTME: Pure rule-based planning with no storage, clock, or network access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainplan Intelligence
//!
//! A small rule-based periodization scheduler. Data flows leaf-first:
//!
//! 1. [`goal_classifier`] turns goal text into a [`TrainingArchetype`]
//! 2. [`pattern_library`] and [`load_model`] derive the day sequence and base load
//! 3. [`adherence`] nudges the load from the previous seven days of history
//! 4. [`exercise_templates`] fills each training day with movements
//! 5. [`week_builder`] assembles the finished [`WeekPrescription`]
//!
//! [`TrainingArchetype`]: trainplan_core::models::TrainingArchetype

/// Adherence modulation over the lookback window
pub mod adherence;
/// Movement templates per day type and experience level
pub mod exercise_templates;
/// Goal text to archetype classification
pub mod goal_classifier;
/// Base intensity and volume per archetype and experience
pub mod load_model;
/// Canonical weekly splits and modulo tiling
pub mod pattern_library;
/// Numeric constants of the planning heuristic
pub mod plan_constants;
/// Week assembly from the components above
pub mod week_builder;

pub use adherence::{modulate, AdherenceModulation, AdherenceSignal};
pub use exercise_templates::{templates_for, templates_for_label};
pub use goal_classifier::classify;
pub use load_model::{base_intensity, base_volume};
pub use pattern_library::{base_pattern, pattern_for};
pub use week_builder::{build_week, clamp_day_count, describe_day, WeekInputs, WeekPrescription};
