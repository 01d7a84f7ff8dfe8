//! Handlers for the `/apoyos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::apoyo::{CreateApoyo, Apoyo, UpdateApoyo};
use idi_db::repositories::ApoyoRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "Apoyo";

/// POST /apoyos
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateApoyo>,
) -> AppResult<(StatusCode, Json<Apoyo>)> {
    let apoyo = ApoyoRepo::create(&state.pool, &input).await?;
    tracing::info!(apoyo_id = apoyo.id_apoyo, "Apoyo created");
    Ok((StatusCode::CREATED, Json(apoyo)))
}

/// GET /apoyos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Apoyo>>> {
    let rows = ApoyoRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /apoyos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Apoyo>> {
    let apoyo = ApoyoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(apoyo))
}

/// GET /apoyos/buscar/tipo/{tipo}
pub async fn search_by_tipo(
    State(state): State<AppState>,
    IdPath(tipo): IdPath<String>,
) -> AppResult<Json<Vec<Apoyo>>> {
    let rows = ApoyoRepo::search_by_tipo(&state.pool, &tipo).await?;
    Ok(Json(rows))
}

/// GET /apoyos/buscar/detalle/{detalle}
pub async fn search_by_detalle(
    State(state): State<AppState>,
    IdPath(detalle): IdPath<String>,
) -> AppResult<Json<Vec<Apoyo>>> {
    let rows = ApoyoRepo::search_by_detalle(&state.pool, &detalle).await?;
    Ok(Json(rows))
}

/// PUT /apoyos/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateApoyo>,
) -> AppResult<Json<Apoyo>> {
    let apoyo = ApoyoRepo::update(&state.pool, id, &UpdateApoyo::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(apoyo_id = id, "Apoyo replaced");
    Ok(Json(apoyo))
}

/// PATCH /apoyos/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateApoyo>,
) -> AppResult<Json<Apoyo>> {
    let apoyo = ApoyoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(apoyo_id = id, "Apoyo updated");
    Ok(Json(apoyo))
}

/// DELETE /apoyos/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if ApoyoRepo::delete(&state.pool, id).await? {
        tracing::info!(apoyo_id = id, "Apoyo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
