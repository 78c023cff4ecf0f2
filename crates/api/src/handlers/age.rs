//! Age classification endpoint.

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use super::json_body;
use crate::{ApiError, ApiResult};

/// Ages at or above this are adults.
pub const ADULT_AGE: i64 = 18;

/// Age as sent by clients: a JSON integer, a whole-number float such as
/// `17.0`, or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AgeValue {
    Number(i64),
    Float(f64),
    Text(String),
}

impl AgeValue {
    fn to_years(&self) -> Result<i64, ApiError> {
        match self {
            AgeValue::Number(n) => Ok(*n),
            AgeValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(*f as i64),
            AgeValue::Float(f) => Err(ApiError::Validation(format!(
                "'age' is not a whole number: {f}"
            ))),
            AgeValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ApiError::Validation(format!("'age' is not an integer: {s:?}"))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AgeCheckDto {
    #[serde(default, alias = "nome")]
    pub name: String,
    #[serde(alias = "idade")]
    pub age: AgeValue,
}

#[derive(Debug, Serialize)]
pub struct AgeCheckResponse {
    pub name: String,
    pub age: i64,
    pub adult: bool,
    pub message: &'static str,
}

pub async fn check(
    body: Result<Json<AgeCheckDto>, JsonRejection>,
) -> ApiResult<Json<AgeCheckResponse>> {
    let dto = json_body(body)?;
    let age = dto.age.to_years()?;
    if age < 0 {
        return Err(ApiError::Validation("'age' must not be negative".into()));
    }
    let adult = age >= ADULT_AGE;

    Ok(Json(AgeCheckResponse {
        name: dto.name.trim().to_string(),
        age,
        adult,
        message: if adult { "adult" } else { "minor" },
    }))
}
