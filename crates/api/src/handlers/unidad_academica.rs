//! Handlers for the `/unidades` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::unidad_academica::{
    CreateUnidadAcademica, UnidadAcademica, UpdateUnidadAcademica,
};
use idi_db::repositories::UnidadAcademicaRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "UnidadAcademica";

/// POST /unidades
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateUnidadAcademica>,
) -> AppResult<(StatusCode, Json<UnidadAcademica>)> {
    let unidad = UnidadAcademicaRepo::create(&state.pool, &input).await?;
    tracing::info!(unidad_id = unidad.id_unidad, "UnidadAcademica created");
    Ok((StatusCode::CREATED, Json(unidad)))
}

/// GET /unidades
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UnidadAcademica>>> {
    let rows = UnidadAcademicaRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /unidades/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<UnidadAcademica>> {
    let unidad = UnidadAcademicaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(unidad))
}

/// GET /unidades/buscar/{nombre}
pub async fn search(
    State(state): State<AppState>,
    IdPath(nombre): IdPath<String>,
) -> AppResult<Json<Vec<UnidadAcademica>>> {
    let rows = UnidadAcademicaRepo::search_by_nombre(&state.pool, &nombre).await?;
    Ok(Json(rows))
}

/// PUT /unidades/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateUnidadAcademica>,
) -> AppResult<Json<UnidadAcademica>> {
    let unidad = UnidadAcademicaRepo::update(&state.pool, id, &UpdateUnidadAcademica::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(unidad_id = id, "UnidadAcademica replaced");
    Ok(Json(unidad))
}

/// PATCH /unidades/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateUnidadAcademica>,
) -> AppResult<Json<UnidadAcademica>> {
    let unidad = UnidadAcademicaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(unidad_id = id, "UnidadAcademica updated");
    Ok(Json(unidad))
}

/// DELETE /unidades/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if UnidadAcademicaRepo::delete(&state.pool, id).await? {
        tracing::info!(unidad_id = id, "UnidadAcademica deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
