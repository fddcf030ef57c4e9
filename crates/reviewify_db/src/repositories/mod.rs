//! Repository modules for database access
//!
//! One module per stored entity: the trait plus its models, the SQL
//! implementation, and a factory.

pub mod business;
pub mod business_factory;
pub mod business_sql;
pub mod review;
pub mod review_factory;
pub mod review_sql;

// Re-export the repositories and factories for ease of use
pub use business::{Business, BusinessPage, BusinessRepository, NewBusiness};
pub use business_factory::BusinessRepositoryFactory;
pub use business_sql::SqlBusinessRepository;
pub use review::{CreateReviewError, NewReview, Review, ReviewRepository};
pub use review_factory::ReviewRepositoryFactory;
pub use review_sql::SqlReviewRepository;
