//! Repository for businesses
//!
//! Defines the storage model for a business listing and the interface the
//! business endpoints talk to. The only implementation today is SQL-backed;
//! the trait keeps the handlers independent of that choice.

use crate::error::DbError;

/// A stored business listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// The fields of a business before the store has assigned it an id. Used for
/// both creation and full replacement.
#[derive(Debug, Clone)]
pub struct NewBusiness {
    pub owner_id: i64,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// One window of the business listing plus the total row count, so the
/// responder can decide whether a next page exists.
#[derive(Debug, Clone)]
pub struct BusinessPage {
    pub entries: Vec<Business>,
    pub total: i64,
}

/// Repository for businesses
pub trait BusinessRepository {
    /// Create the businesses table if it does not already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Persist a new business and return it with its generated id.
    fn create(
        &self,
        new: NewBusiness,
    ) -> impl std::future::Future<Output = Result<Business, DbError>> + Send;

    /// Fetch a business by id, `None` when it does not exist.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Business>, DbError>> + Send;

    /// Fetch one page of businesses ordered by ascending id, together with
    /// the total number of rows.
    fn list(
        &self,
        offset: i64,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<BusinessPage, DbError>> + Send;

    /// Fetch every business belonging to an owner, unpaginated.
    fn list_by_owner(
        &self,
        owner_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Business>, DbError>> + Send;

    /// Fully replace a business's fields. `None` when the id does not exist.
    fn replace(
        &self,
        id: i64,
        fields: NewBusiness,
    ) -> impl std::future::Future<Output = Result<Option<Business>, DbError>> + Send;

    /// Delete a business and every review referencing it.
    ///
    /// Returns `false` when no business had that id.
    fn delete(&self, id: i64) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;
}
