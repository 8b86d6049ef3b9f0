// ABOUTME: SQLite implementation of the profile repository
// ABOUTME: Reads and writes the per-user goal text

use super::ProfileRepository;
use crate::database::Database;
use crate::errors::DatabaseError;
use async_trait::async_trait;

/// `SQLite` implementation of `ProfileRepository`
#[derive(Clone)]
pub struct ProfileRepositoryImpl {
    db: Database,
}

impl ProfileRepositoryImpl {
    /// Create a new `ProfileRepository` over the given database
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn get_user_goal(&self, user_id: &str) -> Result<Option<String>, DatabaseError> {
        self.db
            .get_user_goal(user_id)
            .await
            .map_err(|e| DatabaseError::QueryError { context: e.message })
    }

    async fn set_user_goal(&self, user_id: &str, goal: &str) -> Result<(), DatabaseError> {
        self.db
            .set_user_goal(user_id, goal)
            .await
            .map_err(|e| DatabaseError::QueryError { context: e.message })
    }
}
