//! Factory for creating business repositories

use crate::repositories::business_sql::SqlBusinessRepository;
use crate::{DbClient, RepositoryFactory};

/// Factory for creating business repositories
#[derive(Debug, Clone)]
pub struct BusinessRepositoryFactory;

impl BusinessRepositoryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BusinessRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFactory<SqlBusinessRepository, DbClient> for BusinessRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlBusinessRepository {
        SqlBusinessRepository::new(db_client)
    }
}
