use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::{ErrorResponse, InvalidInputResponse};
use crate::validation::FieldErrors;

pub const BOOKMARK_NOT_FOUND: &str = "Bookmark not found";
pub const INVALID_INPUT: &str = "Invalid input";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(&'static str),

    /// Body could not be read at all (for example over the size limit).
    #[error("unreadable payload: {1}")]
    Payload(StatusCode, String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bookmark_not_found() -> Self {
        ApiError::NotFound(BOOKMARK_NOT_FOUND)
    }

    pub fn internal<E: std::error::Error>(err: E) -> Self {
        ApiError::Internal(crate::unpack_error(&err))
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        ApiError::internal(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(details) => {
                tracing::info!(?details, "rejected invalid input");
                (
                    StatusCode::BAD_REQUEST,
                    Json(InvalidInputResponse {
                        error: INVALID_INPUT.to_string(),
                        details,
                    }),
                )
                    .into_response()
            }
            ApiError::NotFound(msg) => {
                tracing::debug!("{}", msg);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse {
                        error: msg.to_string(),
                    }),
                )
                    .into_response()
            }
            ApiError::Payload(status, msg) => {
                tracing::info!(%status, "rejected request body: {}", msg);
                (status, Json(ErrorResponse { error: msg })).into_response()
            }
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: INTERNAL_ERROR.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
