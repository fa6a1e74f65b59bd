use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::error::ServiceError;
use log::error;
use serde_json::json;
use thiserror::Error;

/// Route-level failure type; service errors keep their tag so each kind
/// maps to its own status code instead of a blanket 500
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Admin role required")]
    Forbidden,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Service(ServiceError::NotFound(message)) => {
                (StatusCode::NOT_FOUND, message)
            }
            ApiError::Service(ServiceError::Validation(message)) => {
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::Service(ServiceError::Conflict(message)) => {
                (StatusCode::CONFLICT, message)
            }
            ApiError::Service(ServiceError::Database(err)) => {
                error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Service(ServiceError::Serialization(err)) => {
                error!("stored json could not be deserialized: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Admin role required".to_string()),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
