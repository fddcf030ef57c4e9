#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::BusinessesState;
pub use routes::routes;
