//! Router assembly for the Reviewify service.
//!
//! Split out of `main.rs` so integration tests can build the exact router the
//! binary serves, against a store of their choosing.

use axum::{routing::get, Router};
use reviewify_config::AppConfig;
use reviewify_db::{
    BusinessRepository, BusinessRepositoryFactory, DbClientFactory, DbError, RepositoryFactory,
    ReviewRepository, ReviewRepositoryFactory, SqlBusinessRepository, SqlReviewRepository,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Connects to the backing store, runs schema initialization, and returns the
/// fully wired router.
///
/// # Errors
///
/// Fails when the database configuration is missing (the binary treats this
/// as fatal), the connection cannot be established, or schema init fails.
pub async fn build_app(config: Arc<AppConfig>) -> Result<Router, DbError> {
    let db_client = DbClientFactory::new().from_app_config(&config).await?;

    let business_repository =
        BusinessRepositoryFactory::new().create_repository(db_client.clone());
    let review_repository = ReviewRepositoryFactory::new().create_repository(db_client);

    business_repository.init_schema().await?;
    review_repository.init_schema().await?;

    Ok(app(config, business_repository, review_repository))
}

/// Assembles the router from already-initialized repositories.
pub fn app(
    config: Arc<AppConfig>,
    business_repository: SqlBusinessRepository,
    review_repository: SqlReviewRepository,
) -> Router {
    let router = Router::new()
        .route(
            "/",
            get(|| async { "Please navigate to /businesses or /reviews to use this API" }),
        )
        .merge(reviewify_businesses::routes(
            config.clone(),
            business_repository,
        ))
        .merge(reviewify_reviews::routes(config, review_repository));

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    let router = {
        use reviewify_businesses::doc::BusinessesApiDoc;
        use reviewify_reviews::doc::ReviewsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Reviewify API",
                version = "0.1.0",
                description = "Business listings and reviews"
            ),
            tags((name = "Reviewify", description = "Core service endpoints")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BusinessesApiDoc::openapi());
        openapi_doc.merge(ReviewsApiDoc::openapi());

        router.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc))
    };

    router.layer(TraceLayer::new_for_http())
}
