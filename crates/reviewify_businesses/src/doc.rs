use crate::models::{BusinessListView, BusinessPayload, BusinessView};
use utoipa::OpenApi;

/// OpenAPI documentation for the business endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::create_business_handler,
        crate::handlers::list_businesses_handler,
        crate::handlers::get_business_handler,
        crate::handlers::replace_business_handler,
        crate::handlers::delete_business_handler,
        crate::handlers::list_owner_businesses_handler,
    ),
    components(schemas(BusinessPayload, BusinessView, BusinessListView)),
    tags(
        (name = "Businesses", description = "CRUD and listing for business records")
    )
)]
pub struct BusinessesApiDoc;
