// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Mutates process env vars, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use trainplan_server::config::environment::{DatabaseUrl, Environment, LogLevel, ServerConfig};
use trainplan_server::services::plan_synthesizer::RestDayPolicy;

const CONFIG_VARS: [&str; 9] = [
    "HTTP_PORT",
    "DATABASE_URL",
    "RUST_LOG",
    "ENVIRONMENT",
    "JWT_SECRET",
    "JWT_EXPIRY_HOURS",
    "PLAN_REST_DAY_POLICY",
    "CORS_ALLOWED_ORIGINS",
    "AUTO_MIGRATE",
];

fn clear_config_env() {
    for var in CONFIG_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_from_empty_environment() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(
        config.database.url,
        DatabaseUrl::parse_url("sqlite:./data/trainplan.db")
    );
    assert!(config.database.auto_migrate);
    assert_eq!(config.auth.jwt_secret, None);
    assert_eq!(config.auth.jwt_expiry_hours, 24);
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(config.plan.rest_day_policy, RestDayPolicy::Persist);
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_config_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("RUST_LOG", "debug,sqlx=warn");
    env::set_var("JWT_SECRET", "configured-secret");
    env::set_var("JWT_EXPIRY_HOURS", "2");
    env::set_var("PLAN_REST_DAY_POLICY", "skip");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://coach.example.com");
    env::set_var("AUTO_MIGRATE", "false");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9090);
    assert!(config.database.url.is_memory());
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.auth.jwt_secret.as_deref(), Some("configured-secret"));
    assert_eq!(config.auth.jwt_expiry_hours, 2);
    assert_eq!(config.plan.rest_day_policy, RestDayPolicy::Skip);
    assert_eq!(config.cors.allowed_origins, "https://coach.example.com");
    assert!(!config.database.auto_migrate);

    let summary = config.summary();
    assert!(summary.contains("9090"));
    assert!(summary.contains("Rest Days: skip"));
    assert!(!summary.contains("configured-secret"));

    clear_config_env();
}

#[test]
#[serial]
fn test_invalid_numbers_are_rejected() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");
    assert!(ServerConfig::from_env().is_err());

    clear_config_env();
    env::set_var("JWT_EXPIRY_HOURS", "0");
    assert!(ServerConfig::from_env().is_err());

    clear_config_env();
}

#[test]
#[serial]
fn test_production_requires_secret() {
    clear_config_env();
    env::set_var("ENVIRONMENT", "production");
    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("JWT_SECRET"));

    env::set_var("JWT_SECRET", "prod-secret");
    let config = ServerConfig::from_env().unwrap();
    assert!(config.environment.is_production());

    clear_config_env();
}

#[test]
#[serial]
fn test_empty_secret_counts_as_unset() {
    clear_config_env();
    env::set_var("JWT_SECRET", "");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.auth.jwt_secret, None);
    assert!(config.summary().contains("Ephemeral"));

    clear_config_env();
}

#[test]
#[serial]
fn test_origin_list_without_valid_entry_is_rejected() {
    clear_config_env();
    env::set_var("CORS_ALLOWED_ORIGINS", "bad\norigin");
    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("CORS_ALLOWED_ORIGINS"));

    // One usable entry is enough
    env::set_var("CORS_ALLOWED_ORIGINS", "bad\norigin,https://coach.example.com");
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.cors.origins().count(), 2);

    env::set_var("CORS_ALLOWED_ORIGINS", "");
    assert!(ServerConfig::from_env().unwrap().cors.allows_any_origin());

    clear_config_env();
}
