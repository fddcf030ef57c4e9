//! SQL implementation of the review repository

use crate::error::DbError;
use crate::repositories::review::{CreateReviewError, NewReview, Review, ReviewRepository};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

const REVIEW_COLUMNS: &str = "id, user_id, business_id, stars, review_text";

/// SQL implementation of the review repository
#[derive(Debug, Clone)]
pub struct SqlReviewRepository {
    db_client: DbClient,
}

impl SqlReviewRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn row_to_review(row: &AnyRow) -> Result<Review, DbError> {
    Ok(Review {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        business_id: row.try_get("business_id")?,
        stars: row.try_get("stars")?,
        review_text: row.try_get("review_text")?,
    })
}

/// Classifies a failed insert. The UNIQUE and FOREIGN KEY constraints are the
/// authoritative enforcement; the driver only tells us which one fired
/// through the message text.
fn classify_insert_error(err: &sqlx::Error) -> Option<CreateReviewError> {
    let message = err.to_string().to_lowercase();
    if message.contains("unique") {
        Some(CreateReviewError::Duplicate)
    } else if message.contains("foreign key") {
        Some(CreateReviewError::BusinessNotFound)
    } else {
        None
    }
}

impl ReviewRepository for SqlReviewRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing reviews schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                business_id INTEGER NOT NULL,
                stars INTEGER NOT NULL CHECK (stars >= 0 AND stars <= 5),
                review_text TEXT,
                FOREIGN KEY (business_id) REFERENCES businesses (id) ON DELETE CASCADE,
                UNIQUE (user_id, business_id)
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Reviews schema initialized successfully");
        Ok(())
    }

    async fn create(&self, new: NewReview) -> Result<Review, CreateReviewError> {
        debug!(
            "Creating review by user {} for business {}",
            new.user_id, new.business_id
        );

        // Pre-checks buy a friendlier error when they win the race; the
        // constraints on the insert below are what actually guarantee the
        // invariants.
        let business = sqlx::query("SELECT id FROM businesses WHERE id = $1")
            .bind(new.business_id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        if business.is_none() {
            return Err(CreateReviewError::BusinessNotFound);
        }

        let existing = sqlx::query("SELECT id FROM reviews WHERE user_id = $1 AND business_id = $2")
            .bind(new.user_id)
            .bind(new.business_id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        if existing.is_some() {
            return Err(CreateReviewError::Duplicate);
        }

        let query = r#"
            INSERT INTO reviews (user_id, business_id, stars, review_text)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, business_id, stars, review_text
        "#;

        let row = sqlx::query(query)
            .bind(new.user_id)
            .bind(new.business_id)
            .bind(new.stars)
            .bind(&new.review_text)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                if let Some(classified) = classify_insert_error(&e) {
                    return classified;
                }
                error!("Failed to insert review: {}", e);
                CreateReviewError::Db(DbError::QueryError(e.to_string()))
            })?;

        let review = row_to_review(&row)?;
        info!("Review {} created successfully", review.id);
        Ok(review)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, DbError> {
        let query = format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find review: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(row_to_review).transpose()
    }

    async fn update(
        &self,
        id: i64,
        stars: i64,
        review_text: Option<String>,
    ) -> Result<Option<Review>, DbError> {
        debug!("Updating review: {}", id);

        // COALESCE keeps the stored text when the caller did not supply one
        let query = r#"
            UPDATE reviews
            SET stars = $1, review_text = COALESCE($2, review_text)
            WHERE id = $3
            RETURNING id, user_id, business_id, stars, review_text
        "#;

        let row = sqlx::query(query)
            .bind(stars)
            .bind(&review_text)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update review: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(row_to_review).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, DbError> {
        debug!("Deleting review: {}", id);

        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete review: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Review>, DbError> {
        let query = format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE user_id = $1 ORDER BY id");

        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list reviews for user: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(row_to_review).collect()
    }
}
