//! SQL implementation of the business repository

use crate::error::DbError;
use crate::repositories::business::{Business, BusinessPage, BusinessRepository, NewBusiness};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

const BUSINESS_COLUMNS: &str = "id, owner_id, name, street_address, city, state, zip_code";

/// SQL implementation of the business repository
#[derive(Debug, Clone)]
pub struct SqlBusinessRepository {
    db_client: DbClient,
}

impl SqlBusinessRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn row_to_business(row: &AnyRow) -> Result<Business, DbError> {
    Ok(Business {
        id: row.try_get("id")?,
        owner_id: row.try_get("owner_id")?,
        name: row.try_get("name")?,
        street_address: row.try_get("street_address")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        zip_code: row.try_get("zip_code")?,
    })
}

impl BusinessRepository for SqlBusinessRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing businesses schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS businesses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                street_address TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                zip_code TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Businesses schema initialized successfully");
        Ok(())
    }

    async fn create(&self, new: NewBusiness) -> Result<Business, DbError> {
        debug!("Creating business for owner: {}", new.owner_id);

        let query = r#"
            INSERT INTO businesses (owner_id, name, street_address, city, state, zip_code)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, owner_id, name, street_address, city, state, zip_code
        "#;

        let row = sqlx::query(query)
            .bind(new.owner_id)
            .bind(&new.name)
            .bind(&new.street_address)
            .bind(&new.city)
            .bind(&new.state)
            .bind(&new.zip_code)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert business: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row_to_business(&row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Business>, DbError> {
        let query = format!("SELECT {BUSINESS_COLUMNS} FROM businesses WHERE id = $1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find business: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(row_to_business).transpose()
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<BusinessPage, DbError> {
        debug!("Listing businesses offset={} limit={}", offset, limit);

        let total_row = sqlx::query("SELECT COUNT(*) AS total FROM businesses")
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to count businesses: {}", e);
                DbError::QueryError(e.to_string())
            })?;
        let total: i64 = total_row.try_get("total")?;

        let query = format!(
            "SELECT {BUSINESS_COLUMNS} FROM businesses ORDER BY id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list businesses: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let entries = rows
            .iter()
            .map(row_to_business)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BusinessPage { entries, total })
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Business>, DbError> {
        let query = format!(
            "SELECT {BUSINESS_COLUMNS} FROM businesses WHERE owner_id = $1 ORDER BY id"
        );

        let rows = sqlx::query(&query)
            .bind(owner_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list businesses for owner: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(row_to_business).collect()
    }

    async fn replace(&self, id: i64, fields: NewBusiness) -> Result<Option<Business>, DbError> {
        debug!("Replacing business: {}", id);

        let query = r#"
            UPDATE businesses
            SET owner_id = $1, name = $2, street_address = $3, city = $4, state = $5, zip_code = $6
            WHERE id = $7
            RETURNING id, owner_id, name, street_address, city, state, zip_code
        "#;

        let row = sqlx::query(query)
            .bind(fields.owner_id)
            .bind(&fields.name)
            .bind(&fields.street_address)
            .bind(&fields.city)
            .bind(&fields.state)
            .bind(&fields.zip_code)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to replace business: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(row_to_business).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, DbError> {
        debug!("Deleting business: {}", id);

        // The schema declares ON DELETE CASCADE, but sqlite only enforces it
        // when foreign keys are enabled on the connection. Delete dependents
        // explicitly inside one transaction so the cascade holds everywhere.
        let mut tx = self.db_client.begin().await?;

        sqlx::query("DELETE FROM reviews WHERE business_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to delete reviews for business: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let result = sqlx::query("DELETE FROM businesses WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to delete business: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
