use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use db::{NewUsuario, Usuario, UsuarioPatch};

use super::{json_body, usuario_id};
use crate::{ApiResult, AppState};

/// Lists users; `?q=` filters on name or phone.
///
/// The query string is read as raw pairs so it can never be rejected; when
/// `q` is repeated the first value wins.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Usuario>>> {
    let filter = params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str());
    let rows = state.store.list(filter).await?;
    Ok(Json(rows))
}

pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Usuario>> {
    let id = usuario_id(id)?;
    Ok(Json(state.store.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewUsuario>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Usuario>)> {
    let input = json_body(body)?;
    let created = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Serves both PUT and PATCH; either way only the supplied fields change.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UsuarioPatch>, JsonRejection>,
) -> ApiResult<Json<Usuario>> {
    let id = usuario_id(id)?;
    let patch = json_body(body)?;
    Ok(Json(state.store.update(id, patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = usuario_id(id)?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
