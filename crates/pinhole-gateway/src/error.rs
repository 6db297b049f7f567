use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pinhole_core::ShortenerError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Gateway-level error mapped onto an HTTP status with a plain-text body.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request body or invalid URL.
    BadRequest(String),
    /// Unknown short code.
    NotFound(String),
    /// The engine failed in a way the caller cannot fix.
    Internal(String),
}

impl From<ShortenerError> for ApiError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::InvalidUrl(_) => Self::BadRequest(err.to_string()),
            ShortenerError::NotFound(_) | ShortenerError::InvalidShortCode(_) => {
                Self::NotFound(err.to_string())
            }
            ShortenerError::CodeConflict(_) | ShortenerError::IdSpaceExhausted(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, message).into_response()
    }
}
