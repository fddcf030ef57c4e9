use crate::models::{ReviewPayload, ReviewUpdatePayload, ReviewView};
use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use reviewify_common::{ApiError, LinkBuilder};
use reviewify_config::AppConfig;
use reviewify_db::{ReviewRepository, SqlReviewRepository};
use std::sync::Arc;
use tracing::debug;

// State for review handlers
#[derive(Clone)]
pub struct ReviewsState {
    pub config: Arc<AppConfig>,
    pub repository: SqlReviewRepository,
}

impl ReviewsState {
    fn links(&self) -> LinkBuilder {
        LinkBuilder::from_server_config(&self.config.server)
    }
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/reviews",
    request_body = ReviewPayload,
    responses(
        (status = 201, description = "Review created", body = ReviewView),
        (status = 400, description = "Request body missing required attributes"),
        (status = 404, description = "Referenced business does not exist"),
        (status = 409, description = "User already reviewed this business")
    ),
    tag = "Reviews"
))]
pub async fn create_review_handler(
    State(state): State<Arc<ReviewsState>>,
    payload: Result<Json<ReviewPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ReviewView>), ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::MissingAttributes)?;
    let fields = payload.validate().map_err(|missing| {
        debug!("review payload missing fields: {:?}", missing);
        ApiError::MissingAttributes
    })?;

    let review = state.repository.create(fields).await?;
    let view = ReviewView::from_entity(&review, &state.links());
    Ok((StatusCode::CREATED, Json(view)))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/reviews/{review_id}",
    responses(
        (status = 200, description = "The review", body = ReviewView),
        (status = 404, description = "No review with this id")
    ),
    tag = "Reviews"
))]
pub async fn get_review_handler(
    State(state): State<Arc<ReviewsState>>,
    Path(review_id): Path<i64>,
) -> Result<Json<ReviewView>, ApiError> {
    let review = state
        .repository
        .find_by_id(review_id)
        .await?
        .ok_or(ApiError::ReviewNotFound)?;
    Ok(Json(ReviewView::from_entity(&review, &state.links())))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/reviews/{review_id}",
    request_body = ReviewUpdatePayload,
    responses(
        (status = 200, description = "Review updated", body = ReviewView),
        (status = 400, description = "Request body missing required attributes"),
        (status = 404, description = "No review with this id")
    ),
    tag = "Reviews"
))]
pub async fn update_review_handler(
    State(state): State<Arc<ReviewsState>>,
    Path(review_id): Path<i64>,
    payload: Result<Json<ReviewUpdatePayload>, JsonRejection>,
) -> Result<Json<ReviewView>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::MissingAttributes)?;
    let (stars, review_text) = payload.validate().map_err(|missing| {
        debug!("review update missing fields: {:?}", missing);
        ApiError::MissingAttributes
    })?;

    let review = state
        .repository
        .update(review_id, stars, review_text)
        .await?
        .ok_or(ApiError::ReviewNotFound)?;
    Ok(Json(ReviewView::from_entity(&review, &state.links())))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/reviews/{review_id}",
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "No review with this id")
    ),
    tag = "Reviews"
))]
pub async fn delete_review_handler(
    State(state): State<Arc<ReviewsState>>,
    Path(review_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.repository.delete(review_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::ReviewNotFound)
    }
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/users/{user_id}/reviews",
    responses(
        (status = 200, description = "All reviews by the user", body = [ReviewView])
    ),
    tag = "Reviews"
))]
pub async fn list_user_reviews_handler(
    State(state): State<Arc<ReviewsState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<ReviewView>>, ApiError> {
    let reviews = state.repository.list_by_user(user_id).await?;
    let links = state.links();
    let views = reviews
        .iter()
        .map(|review| ReviewView::from_entity(review, &links))
        .collect();
    Ok(Json(views))
}
