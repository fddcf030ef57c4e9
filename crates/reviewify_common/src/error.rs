use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// The error taxonomy for the whole API surface.
///
/// Every handler converts its failures into one of these variants; the
/// `Display` string is exactly what clients see in the `{"Error": ...}` body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body is absent, unparseable, or missing required fields
    #[error("The request body is missing at least one of the required attributes")]
    MissingAttributes,

    /// No business exists under the requested id
    #[error("No business with this business_id exists")]
    BusinessNotFound,

    /// No review exists under the requested id
    #[error("No review with this review_id exists")]
    ReviewNotFound,

    /// A review by this user for this business already exists
    #[error("You have already submitted a review for this business. You can update your previous review, or delete it and submit a new review")]
    DuplicateReview,

    /// The backing store failed; the detail is logged, never returned
    #[error("Unable to process request")]
    Storage(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> StatusCode;
}

impl HttpStatusCode for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingAttributes => StatusCode::BAD_REQUEST,
            ApiError::BusinessNotFound => StatusCode::NOT_FOUND,
            ApiError::ReviewNotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateReview => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(detail) = &self {
            error!("storage failure: {detail}");
        }
        let body = Json(json!({ "Error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_surface_contract() {
        assert_eq!(
            ApiError::MissingAttributes.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BusinessNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::ReviewNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::DuplicateReview.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Storage("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_detail_never_reaches_the_message() {
        let err = ApiError::Storage("UNIQUE constraint failed".into());
        assert_eq!(err.to_string(), "Unable to process request");
    }

    #[test]
    fn not_found_messages_name_the_id_field() {
        assert_eq!(
            ApiError::BusinessNotFound.to_string(),
            "No business with this business_id exists"
        );
        assert_eq!(
            ApiError::ReviewNotFound.to_string(),
            "No review with this review_id exists"
        );
    }
}
