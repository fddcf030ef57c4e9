//! Database integration for Reviewify
//!
//! This crate is the only component that touches the backing store. It wraps
//! a SQLx `Any` connection pool and exposes one repository per entity
//! (businesses, reviews); SQLite, PostgreSQL and MySQL are selectable through
//! feature flags, with SQLite as the default.
//!
//! # Example
//!
//! ```rust,no_run
//! use reviewify_db::{BusinessRepository, BusinessRepositoryFactory, DbClient, RepositoryFactory};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let db_client = DbClient::from_url("sqlite://reviewify.db").await?;
//!     let businesses = BusinessRepositoryFactory::new().create_repository(db_client);
//!     businesses.init_schema().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use client::{DbClient, DbTransaction};
pub use error::DbError;
pub use factory::DbClientFactory;
pub use repository::RepositoryFactory;

pub use repositories::{
    Business, BusinessPage, BusinessRepository, BusinessRepositoryFactory, CreateReviewError,
    NewBusiness, NewReview, Review, ReviewRepository, ReviewRepositoryFactory,
    SqlBusinessRepository, SqlReviewRepository,
};
