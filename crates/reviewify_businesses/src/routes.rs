use crate::handlers::{
    create_business_handler, delete_business_handler, get_business_handler,
    list_businesses_handler, list_owner_businesses_handler, replace_business_handler,
    BusinessesState,
};
use axum::{
    routing::{get, post},
    Router,
};
use reviewify_config::AppConfig;
use reviewify_db::SqlBusinessRepository;
use std::sync::Arc;

pub fn routes(config: Arc<AppConfig>, repository: SqlBusinessRepository) -> Router {
    let state = Arc::new(BusinessesState { config, repository });

    Router::new()
        .route(
            "/businesses",
            post(create_business_handler).get(list_businesses_handler),
        )
        .route(
            "/businesses/{business_id}",
            get(get_business_handler)
                .put(replace_business_handler)
                .delete(delete_business_handler),
        )
        .route(
            "/owners/{owner_id}/businesses",
            get(list_owner_businesses_handler),
        )
        .with_state(state)
}
