//! Factory for creating review repositories

use crate::repositories::review_sql::SqlReviewRepository;
use crate::{DbClient, RepositoryFactory};

/// Factory for creating review repositories
#[derive(Debug, Clone)]
pub struct ReviewRepositoryFactory;

impl ReviewRepositoryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReviewRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFactory<SqlReviewRepository, DbClient> for ReviewRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlReviewRepository {
        SqlReviewRepository::new(db_client)
    }
}
