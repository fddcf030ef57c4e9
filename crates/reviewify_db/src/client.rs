//! Database client for Reviewify
//!
//! A thin, driver-agnostic wrapper over a SQLx `Any` connection pool. The
//! client is created once at startup and cloned into each repository; clones
//! share the same pool.

use crate::error::DbError;
use reviewify_config::{AppConfig, DatabaseConfig};
use sqlx::pool::PoolOptions;
use sqlx::{Pool, Transaction};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Type alias for a database transaction
pub type DbTransaction<'a> = Transaction<'a, sqlx::Any>;

/// Database client for Reviewify
#[derive(Debug, Clone)]
pub struct DbClient {
    pool: Pool<sqlx::Any>,
}

impl DbClient {
    /// Create a new database client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the database configuration is missing, the URL is
    /// empty, or the connection fails. The caller treats the missing-config
    /// case as fatal at startup.
    pub async fn new(config: &Arc<AppConfig>) -> Result<Self, DbError> {
        let db_config = config.database.as_ref().ok_or_else(|| {
            DbError::ConfigError(
                "Database configuration is missing. Define database.url or DATABASE_URL"
                    .to_string(),
            )
        })?;
        Self::from_config(db_config).await
    }

    /// Create a new database client from a database configuration.
    pub async fn from_config(db_config: &DatabaseConfig) -> Result<Self, DbError> {
        Self::from_url(&db_config.url).await
    }

    /// Create a new database client from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or invalid, or the connection
    /// fails.
    pub async fn from_url(db_url: &str) -> Result<Self, DbError> {
        if db_url.is_empty() {
            return Err(DbError::UrlError("Database URL is empty".to_string()));
        }
        let pool = Self::create_pool(db_url).await?;
        Ok(Self { pool })
    }

    async fn create_pool(db_url: &str) -> Result<Pool<sqlx::Any>, DbError> {
        debug!("Creating database pool with URL: {}", db_url);

        // Register the compiled-in drivers with the Any driver
        sqlx::any::install_default_drivers();

        let pool_options = PoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .idle_timeout(Duration::from_secs(600));

        // SQLite will not create a missing database file through the Any
        // connect options, so make sure the file and its directory exist.
        #[cfg(feature = "sqlite")]
        if let Some(db_path) = sqlite_file_path(db_url) {
            if let Some(dir) = std::path::Path::new(&db_path).parent() {
                if !dir.as_os_str().is_empty() && !dir.exists() {
                    debug!("Creating directory for SQLite database: {:?}", dir);
                    std::fs::create_dir_all(dir).map_err(|e| {
                        error!("Failed to create directory for SQLite database: {}", e);
                        DbError::PoolError(format!("Failed to create directory: {}", e))
                    })?;
                }
            }
            if !std::path::Path::new(&db_path).exists() {
                debug!("Creating empty SQLite database file: {}", db_path);
                std::fs::File::create(&db_path).map_err(|e| {
                    error!("Failed to create SQLite database file: {}", e);
                    DbError::PoolError(format!("Failed to create database file: {}", e))
                })?;
            }
        }

        let pool = pool_options
            .connect_with(sqlx::any::AnyConnectOptions::from_str(db_url)?)
            .await
            .map_err(|e| {
                error!("Failed to create database pool: {}", e);
                DbError::PoolError(e.to_string())
            })?;

        info!("Database pool created successfully");
        Ok(pool)
    }

    /// Get the database connection pool.
    pub fn pool(&self) -> &Pool<sqlx::Any> {
        &self.pool
    }

    /// Begin a transaction.
    pub async fn begin(&self) -> Result<DbTransaction<'_>, DbError> {
        self.pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))
    }

    /// Execute a statement that returns no rows, yielding the affected count.
    pub async fn execute(&self, query: &str) -> Result<u64, DbError> {
        sqlx::query(query)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| DbError::QueryError(e.to_string()))
    }

    /// Check whether the database answers a trivial query.
    pub async fn is_healthy(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

/// Extracts the on-disk path from a sqlite URL, `None` for other schemes or
/// in-memory databases.
#[cfg(feature = "sqlite")]
fn sqlite_file_path(db_url: &str) -> Option<String> {
    let path = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"))?;
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    // Strip query parameters such as ?mode=rwc
    let path = path.split('?').next().unwrap_or(path);
    Some(path.to_string())
}

impl std::fmt::Display for DbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DbClient")
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    #[test]
    fn sqlite_path_extraction() {
        assert_eq!(
            sqlite_file_path("sqlite://data/app.db"),
            Some("data/app.db".to_string())
        );
        assert_eq!(
            sqlite_file_path("sqlite:app.db?mode=rwc"),
            Some("app.db".to_string())
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/app"), None);
    }
}
