use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub db: String,
}

/// Liveness check; reports where the database lives.
pub async fn root(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        message: "user API running",
        db: state.store.path().display().to_string(),
    })
}
