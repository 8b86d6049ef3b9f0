// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, auth, CORS, and plan policy from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_config};
use crate::services::plan_synthesizer::RestDayPolicy;
use anyhow::{Context, Result};
use http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operation
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `info`
    ///
    /// A full `RUST_LOG` directive list (`warn,trainplan_server=debug`) resolves
    /// to its leading global level.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        let global = s.split(',').next().unwrap_or_default().trim();
        match global.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite`, lost when the pool closes
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL; a bare path is treated as a `SQLite` file
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path = s.strip_prefix("sqlite://").or_else(|| s.strip_prefix("sqlite:")).unwrap_or(s);
        if path == ":memory:" || path.is_empty() {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path),
            }
        }
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Where the workout store lives
    pub url: DatabaseUrl,
    /// Create tables on startup
    pub auto_migrate: bool,
}

/// Token settings
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret; `None` means a random per-process secret
    pub jwt_secret: Option<String>,
    /// Lifetime of issued tokens in hours
    pub jwt_expiry_hours: i64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[redacted]"))
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .finish()
    }
}

/// Cross-origin settings
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl CorsConfig {
    /// `*` or an empty value opens the API to every origin
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        let raw = self.allowed_origins.trim();
        raw.is_empty() || raw == "*"
    }

    /// Non-empty entries of the origin list
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}

/// Plan synthesis settings
#[derive(Debug, Clone, Copy)]
pub struct PlanConfig {
    /// Whether rest days get a marker row
    pub rest_day_policy: RestDayPolicy,
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Plan synthesis configuration
    pub plan: PlanConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable does not parse, if
    /// production is configured without `JWT_SECRET`, or if an explicit
    /// `CORS_ALLOWED_ORIGINS` list has no valid entry
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_config::http_port()
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            environment: Environment::from_str_or_default(&env_config::environment()),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_config::database_url()),
                auto_migrate: env_var_or("AUTO_MIGRATE", "true")
                    .parse()
                    .context("Invalid AUTO_MIGRATE value")?,
            },
            auth: AuthConfig {
                jwt_secret: env_config::jwt_secret(),
                jwt_expiry_hours: env_config::jwt_expiry_hours()
                    .parse()
                    .context("Invalid JWT_EXPIRY_HOURS value")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            plan: PlanConfig {
                rest_day_policy: RestDayPolicy::from_str_or_default(
                    &env_config::rest_day_policy(),
                ),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive token lifetime, a production
    /// deployment without a signing secret, or an origin list with no usable entry
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_expiry_hours <= 0 {
            return Err(anyhow::anyhow!("JWT_EXPIRY_HOURS must be positive"));
        }

        if self.environment.is_production() && self.auth.jwt_secret.is_none() {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be set when ENVIRONMENT=production"
            ));
        }

        if !self.cors.allows_any_origin()
            && self
                .cors
                .origins()
                .all(|origin| HeaderValue::from_str(origin).is_err())
        {
            return Err(anyhow::anyhow!(
                "CORS_ALLOWED_ORIGINS contains no valid origin: {:?}",
                self.cors.allowed_origins
            ));
        }

        Ok(())
    }

    /// Configuration summary for the startup log (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "trainplan server configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - JWT Secret: {}\n\
             - JWT Expiry: {}h\n\
             - CORS Origins: {}\n\
             - Rest Days: {}",
            self.http_port,
            self.environment,
            self.log_level,
            self.database.url,
            if self.auth.jwt_secret.is_some() {
                "Configured"
            } else {
                "Ephemeral"
            },
            self.auth.jwt_expiry_hours,
            self.cors.allowed_origins,
            self.plan.rest_day_policy,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
        assert_eq!(
            LogLevel::from_str_or_default("trace,sqlx=warn"),
            LogLevel::Trace
        );
        assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("anything"),
            Environment::Development
        );
    }

    #[test]
    fn test_database_url_parsing() {
        let file = DatabaseUrl::parse_url("sqlite:./data/plans.db");
        assert_eq!(
            file,
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/plans.db")
            }
        );
        assert_eq!(file.to_connection_string(), "sqlite:./data/plans.db");

        assert!(DatabaseUrl::parse_url("sqlite::memory:").is_memory());
        assert_eq!(
            DatabaseUrl::Memory.to_connection_string(),
            "sqlite::memory:"
        );

        let bare = DatabaseUrl::parse_url("plans.db");
        assert_eq!(bare.to_connection_string(), "sqlite:plans.db");
    }

    #[test]
    fn test_auth_config_debug_redacts_secret() {
        let auth = AuthConfig {
            jwt_secret: Some("super-secret".into()),
            jwt_expiry_hours: 24,
        };
        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("redacted"));
    }
}
