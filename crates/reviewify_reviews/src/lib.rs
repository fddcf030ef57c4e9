#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::ReviewsState;
pub use routes::routes;
