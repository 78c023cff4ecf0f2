//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The referenced id has no row.
    #[error("row not found")]
    NotFound,

    /// Input failed a required-field or non-empty constraint.
    #[error("{0}")]
    Validation(String),
}
