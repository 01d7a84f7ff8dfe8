//! Handlers for the `/tipo-apoyo` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::tipo_apoyo::{CreateTipoApoyo, TipoApoyo, UpdateTipoApoyo};
use idi_db::repositories::TipoApoyoRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, SearchQuery, ValidJson};
use crate::query::TipoParams;
use crate::state::AppState;

const ENTITY: &str = "TipoApoyo";

/// POST /tipo-apoyo
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTipoApoyo>,
) -> AppResult<(StatusCode, Json<TipoApoyo>)> {
    let tipo_apoyo = TipoApoyoRepo::create(&state.pool, &input).await?;
    tracing::info!(tipo_apoyo_id = tipo_apoyo.id_tipo_apoyo, "TipoApoyo created");
    Ok((StatusCode::CREATED, Json(tipo_apoyo)))
}

/// GET /tipo-apoyo
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TipoApoyo>>> {
    let rows = TipoApoyoRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /tipo-apoyo/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<TipoApoyo>> {
    let tipo_apoyo = TipoApoyoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(tipo_apoyo))
}

/// GET /tipo-apoyo/search?tipo=
pub async fn search(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery<TipoParams>,
) -> AppResult<Json<Vec<TipoApoyo>>> {
    let rows = TipoApoyoRepo::search_by_tipo(&state.pool, &params.tipo).await?;
    Ok(Json(rows))
}

/// PUT /tipo-apoyo/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateTipoApoyo>,
) -> AppResult<Json<TipoApoyo>> {
    let tipo_apoyo = TipoApoyoRepo::update(&state.pool, id, &UpdateTipoApoyo::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(tipo_apoyo_id = id, "TipoApoyo replaced");
    Ok(Json(tipo_apoyo))
}

/// PATCH /tipo-apoyo/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateTipoApoyo>,
) -> AppResult<Json<TipoApoyo>> {
    let tipo_apoyo = TipoApoyoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(tipo_apoyo_id = id, "TipoApoyo updated");
    Ok(Json(tipo_apoyo))
}

/// DELETE /tipo-apoyo/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if TipoApoyoRepo::delete(&state.pool, id).await? {
        tracing::info!(tipo_apoyo_id = id, "TipoApoyo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
