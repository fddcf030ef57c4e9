//! Factory for creating database clients

use crate::client::DbClient;
use crate::error::DbError;
use reviewify_config::{AppConfig, DatabaseConfig};
use std::sync::Arc;
use tracing::debug;

/// Factory for creating database clients from the available configuration
/// sources.
#[derive(Debug, Clone)]
pub struct DbClientFactory;

impl DbClientFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create a database client from the application configuration.
    ///
    /// # Errors
    ///
    /// Fails when the database configuration is absent or the connection
    /// cannot be established.
    pub async fn from_app_config(&self, config: &Arc<AppConfig>) -> Result<DbClient, DbError> {
        debug!("Creating database client from application configuration");
        DbClient::new(config).await
    }

    /// Create a database client from a database configuration.
    pub async fn from_db_config(&self, db_config: &DatabaseConfig) -> Result<DbClient, DbError> {
        DbClient::from_config(db_config).await
    }

    /// Create a database client from a raw URL.
    pub async fn from_url(&self, db_url: &str) -> Result<DbClient, DbError> {
        DbClient::from_url(db_url).await
    }
}

impl Default for DbClientFactory {
    fn default() -> Self {
        Self::new()
    }
}
