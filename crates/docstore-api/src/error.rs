//! Maps domain `AppError` to HTTP responses.
//!
//! `ApiError` is a thin newtype so the `?` operator converts any
//! [`AppError`] coming out of services into an HTTP response at the
//! single application boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use docstore_core::error::{AppError, ErrorKind};

use crate::dto::response::ErrorResponse;

/// HTTP-facing wrapper around the domain error.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %err, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Never leak store-level detail to the client.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            err.message
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Convenience alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;
