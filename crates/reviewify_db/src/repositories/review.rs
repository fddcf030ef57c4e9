//! Repository for reviews
//!
//! A review is unique per (user, business) pair and may only reference a
//! business that exists. Both rules are declared as storage constraints; the
//! repository surfaces them as typed creation errors so the handlers can map
//! them to the right status codes.

use crate::error::DbError;
use reviewify_common::ApiError;
use thiserror::Error;

/// A stored review.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub business_id: i64,
    pub stars: i64,
    pub review_text: Option<String>,
}

/// The fields of a review before the store has assigned it an id.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: i64,
    pub business_id: i64,
    pub stars: i64,
    pub review_text: Option<String>,
}

/// Outcomes of attempting to create a review.
///
/// The pre-checks in [`ReviewRepository::create`] normally produce these, but
/// the storage constraints remain the source of truth: a constraint violation
/// on the insert itself (a lost race) maps to the same variants.
#[derive(Debug, Error)]
pub enum CreateReviewError {
    /// The referenced business does not exist
    #[error("referenced business does not exist")]
    BusinessNotFound,

    /// A review by this user for this business already exists
    #[error("review already exists for this user and business")]
    Duplicate,

    /// The store failed for an unrelated reason
    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<CreateReviewError> for ApiError {
    fn from(err: CreateReviewError) -> Self {
        match err {
            CreateReviewError::BusinessNotFound => ApiError::BusinessNotFound,
            CreateReviewError::Duplicate => ApiError::DuplicateReview,
            CreateReviewError::Db(e) => ApiError::Storage(e.to_string()),
        }
    }
}

/// Repository for reviews
pub trait ReviewRepository {
    /// Create the reviews table if it does not already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Persist a new review after verifying the referenced business exists
    /// and the (user, business) pair is not already reviewed.
    fn create(
        &self,
        new: NewReview,
    ) -> impl std::future::Future<Output = Result<Review, CreateReviewError>> + Send;

    /// Fetch a review by id, `None` when it does not exist.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Review>, DbError>> + Send;

    /// Overwrite `stars`, and `review_text` only when one is supplied; an
    /// absent text leaves the stored value untouched. `None` when the id
    /// does not exist.
    fn update(
        &self,
        id: i64,
        stars: i64,
        review_text: Option<String>,
    ) -> impl std::future::Future<Output = Result<Option<Review>, DbError>> + Send;

    /// Delete a review. Returns `false` when no review had that id.
    fn delete(&self, id: i64) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Fetch every review written by a user, unpaginated.
    fn list_by_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Review>, DbError>> + Send;
}
