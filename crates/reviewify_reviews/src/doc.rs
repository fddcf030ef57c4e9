use crate::models::{ReviewPayload, ReviewUpdatePayload, ReviewView};
use utoipa::OpenApi;

/// OpenAPI documentation for the review endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::create_review_handler,
        crate::handlers::get_review_handler,
        crate::handlers::update_review_handler,
        crate::handlers::delete_review_handler,
        crate::handlers::list_user_reviews_handler,
    ),
    components(schemas(ReviewPayload, ReviewUpdatePayload, ReviewView)),
    tags(
        (name = "Reviews", description = "CRUD for user-submitted business reviews")
    )
)]
pub struct ReviewsApiDoc;
