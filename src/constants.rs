// ABOUTME: Constants for the trainplan server crate
// ABOUTME: Re-exports route paths, defaults, limits, and env lookups from trainplan-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use trainplan_core::constants::{
    defaults, env_config, limits, ports, routes, service_names,
};
