// ABOUTME: Training domain models shared by the planner and the server
// ABOUTME: Re-exports archetypes, experience levels, day types, and prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Archetype, experience level, and day-type enumerations
pub mod training;

/// Day prescriptions and exercise-set templates
pub mod prescription;

pub use prescription::{DayPrescription, SetTemplate};
pub use training::{DayType, ExperienceLevel, TrainingArchetype};
