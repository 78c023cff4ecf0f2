//! API error type and its JSON response mapping.
//!
//! Every failure leaves the service as `{"error": "<message>"}` with the
//! status code of its variant.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/empty required field or malformed body.
    #[error("{0}")]
    Validation(String),

    /// Referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Storage or other unexpected failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn usuario_not_found() -> Self {
        ApiError::NotFound("user not found".into())
    }
}

impl From<db::DbError> for ApiError {
    fn from(err: db::DbError) -> Self {
        match err {
            db::DbError::Validation(message) => ApiError::Validation(message),
            db::DbError::NotFound => ApiError::usuario_not_found(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_errors_map_to_status_codes() {
        let validation: ApiError = db::DbError::Validation("bad".into()).into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.to_string(), "bad");

        let missing: ApiError = db::DbError::NotFound.into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let internal = ApiError::Internal("disk I/O error".into());
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
