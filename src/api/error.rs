//! Mapping of handler errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::error::{ApiError, StoreError};
use crate::item::{Detail, ValidationDetail};

/// Detail text for a duplicate create.
pub const ALREADY_EXISTS_DETAIL: &str = "Item already exists with this ID";
/// Detail text for an unknown id.
pub const NOT_FOUND_DETAIL: &str = "Item not found";
/// Detail text for an update whose body id differs from the path id.
pub const ID_MISMATCH_DETAIL: &str = "Item ID in body does not match path";

/// Status code for each error.
///
/// - `Validation` -> 422
/// - `AlreadyExists` -> 400
/// - `NotFound` -> 404
/// - `IdMismatch` -> 400
pub fn status_code(error: &ApiError) -> StatusCode {
    match error {
        ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApiError::Store(StoreError::AlreadyExists { .. }) => StatusCode::BAD_REQUEST,
        ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
        ApiError::Store(StoreError::IdMismatch { .. }) => StatusCode::BAD_REQUEST,
    }
}

/// Short outcome label for metrics.
pub fn outcome_label(error: &ApiError) -> &'static str {
    match error {
        ApiError::Validation(_) => "validation_error",
        ApiError::Store(StoreError::AlreadyExists { .. }) => "already_exists",
        ApiError::Store(StoreError::NotFound { .. }) => "not_found",
        ApiError::Store(StoreError::IdMismatch { .. }) => "id_mismatch",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        warn!(status = %status, error = %self, "Request rejected");

        match self {
            ApiError::Validation(errors) => (
                status,
                Json(ValidationDetail {
                    detail: errors.0,
                }),
            )
                .into_response(),
            ApiError::Store(err) => {
                let detail = match err {
                    StoreError::AlreadyExists { .. } => ALREADY_EXISTS_DETAIL,
                    StoreError::NotFound { .. } => NOT_FOUND_DETAIL,
                    StoreError::IdMismatch { .. } => ID_MISMATCH_DETAIL,
                };
                (status, Json(Detail::new(detail))).into_response()
            }
        }
    }
}
