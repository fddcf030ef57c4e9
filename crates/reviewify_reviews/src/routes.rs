use crate::handlers::{
    create_review_handler, delete_review_handler, get_review_handler, list_user_reviews_handler,
    update_review_handler, ReviewsState,
};
use axum::{
    routing::{get, post},
    Router,
};
use reviewify_config::AppConfig;
use reviewify_db::SqlReviewRepository;
use std::sync::Arc;

pub fn routes(config: Arc<AppConfig>, repository: SqlReviewRepository) -> Router {
    let state = Arc::new(ReviewsState { config, repository });

    Router::new()
        .route("/reviews", post(create_review_handler))
        .route(
            "/reviews/{review_id}",
            get(get_review_handler)
                .put(update_review_handler)
                .delete(delete_review_handler),
        )
        .route("/users/{user_id}/reviews", get(list_user_reviews_handler))
        .with_state(state)
}
