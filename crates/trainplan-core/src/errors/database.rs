// ABOUTME: Structured error types for database operations
// ABOUTME: Provides domain-specific errors with context and sqlx::Error conversion

use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A query failed to execute
    #[error("Database query failed: {context}")]
    QueryError {
        /// What was being attempted
        context: String,
    },

    /// The pool could not hand out a connection
    #[error("Database connection failed: {context}")]
    ConnectionError {
        /// Connection failure details
        context: String,
    },

    /// Schema creation or upgrade failed
    #[error("Database migration failed: {context}")]
    MigrationError {
        /// Migration failure details
        context: String,
    },

    /// A uniqueness or foreign-key constraint rejected the write
    #[error("Constraint violation: {constraint}")]
    ConstraintViolation {
        /// Name or description of the violated constraint
        constraint: String,
    },
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation() || db_err.is_foreign_key_violation() =>
            {
                Self::ConstraintViolation {
                    constraint: db_err.message().to_owned(),
                }
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionError {
                    context: error.to_string(),
                }
            }
            _ => Self::QueryError {
                context: error.to_string(),
            },
        }
    }
}
