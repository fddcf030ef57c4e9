use crate::models::{BusinessListView, BusinessPayload, BusinessView, PageParams};
use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use reviewify_common::{ApiError, LinkBuilder};
use reviewify_config::AppConfig;
use reviewify_db::{BusinessRepository, NewBusiness, SqlBusinessRepository};
use std::sync::Arc;
use tracing::debug;

// State for business handlers
#[derive(Clone)]
pub struct BusinessesState {
    pub config: Arc<AppConfig>,
    pub repository: SqlBusinessRepository,
}

impl BusinessesState {
    fn links(&self) -> LinkBuilder {
        LinkBuilder::from_server_config(&self.config.server)
    }
}

/// Maps extractor rejections (absent or unparseable bodies) and failed
/// presence checks onto the one missing-attributes error the API exposes.
fn validated(payload: Result<Json<BusinessPayload>, JsonRejection>) -> Result<NewBusiness, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::MissingAttributes)?;
    payload.validate().map_err(|missing| {
        debug!("business payload missing fields: {:?}", missing);
        ApiError::MissingAttributes
    })
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/businesses",
    request_body = BusinessPayload,
    responses(
        (status = 201, description = "Business created", body = BusinessView),
        (status = 400, description = "Request body missing required attributes"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Businesses"
))]
pub async fn create_business_handler(
    State(state): State<Arc<BusinessesState>>,
    payload: Result<Json<BusinessPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<BusinessView>), ApiError> {
    let fields = validated(payload)?;
    let business = state.repository.create(fields).await?;
    let view = BusinessView::from_entity(&business, &state.links());
    Ok((StatusCode::CREATED, Json(view)))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/businesses",
    params(PageParams),
    responses(
        (status = 200, description = "One page of businesses", body = BusinessListView)
    ),
    tag = "Businesses"
))]
pub async fn list_businesses_handler(
    State(state): State<Arc<BusinessesState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<BusinessListView>, ApiError> {
    let page = state.repository.list(params.offset, params.limit).await?;
    let view = BusinessListView::from_page(&page, params.offset, params.limit, &state.links());
    Ok(Json(view))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/businesses/{business_id}",
    responses(
        (status = 200, description = "The business", body = BusinessView),
        (status = 404, description = "No business with this id")
    ),
    tag = "Businesses"
))]
pub async fn get_business_handler(
    State(state): State<Arc<BusinessesState>>,
    Path(business_id): Path<i64>,
) -> Result<Json<BusinessView>, ApiError> {
    let business = state
        .repository
        .find_by_id(business_id)
        .await?
        .ok_or(ApiError::BusinessNotFound)?;
    Ok(Json(BusinessView::from_entity(&business, &state.links())))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/businesses/{business_id}",
    request_body = BusinessPayload,
    responses(
        (status = 200, description = "Business replaced", body = BusinessView),
        (status = 400, description = "Request body missing required attributes"),
        (status = 404, description = "No business with this id")
    ),
    tag = "Businesses"
))]
pub async fn replace_business_handler(
    State(state): State<Arc<BusinessesState>>,
    Path(business_id): Path<i64>,
    payload: Result<Json<BusinessPayload>, JsonRejection>,
) -> Result<Json<BusinessView>, ApiError> {
    let fields = validated(payload)?;
    let business = state
        .repository
        .replace(business_id, fields)
        .await?
        .ok_or(ApiError::BusinessNotFound)?;
    Ok(Json(BusinessView::from_entity(&business, &state.links())))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/businesses/{business_id}",
    responses(
        (status = 204, description = "Business and its reviews deleted"),
        (status = 404, description = "No business with this id")
    ),
    tag = "Businesses"
))]
pub async fn delete_business_handler(
    State(state): State<Arc<BusinessesState>>,
    Path(business_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.repository.delete(business_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::BusinessNotFound)
    }
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/owners/{owner_id}/businesses",
    responses(
        (status = 200, description = "All businesses for the owner", body = [BusinessView])
    ),
    tag = "Businesses"
))]
pub async fn list_owner_businesses_handler(
    State(state): State<Arc<BusinessesState>>,
    Path(owner_id): Path<i64>,
) -> Result<Json<Vec<BusinessView>>, ApiError> {
    let businesses = state.repository.list_by_owner(owner_id).await?;
    let links = state.links();
    let views = businesses
        .iter()
        .map(|business| BusinessView::from_entity(business, &links))
        .collect();
    Ok(Json(views))
}
