//! Route handlers, one module per resource.

pub mod age;
pub mod health;
pub mod usuarios;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Json,
};

use crate::ApiError;

/// Unwrap a JSON body, turning any rejection into a 400.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::Validation(format!(
            "invalid or missing JSON body: {}",
            rejection.body_text()
        ))),
    }
}

/// Unwrap an integer id path segment; anything else is an unknown user.
pub(crate) fn usuario_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|_| ApiError::usuario_not_found())
}
