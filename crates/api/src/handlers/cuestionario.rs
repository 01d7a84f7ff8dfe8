//! Handlers for the `/cuestionarios` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::cuestionario::{CreateCuestionario, Cuestionario, UpdateCuestionario};
use idi_db::repositories::CuestionarioRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "Cuestionario";

/// POST /cuestionarios
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateCuestionario>,
) -> AppResult<(StatusCode, Json<Cuestionario>)> {
    let cuestionario = CuestionarioRepo::create(&state.pool, &input).await?;
    tracing::info!(cuestionario_id = cuestionario.id_cuestionario, "Cuestionario created");
    Ok((StatusCode::CREATED, Json(cuestionario)))
}

/// GET /cuestionarios
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Cuestionario>>> {
    let rows = CuestionarioRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /cuestionarios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Cuestionario>> {
    let cuestionario = CuestionarioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(cuestionario))
}

/// GET /cuestionarios/buscar/{pregunta}
pub async fn search(
    State(state): State<AppState>,
    IdPath(pregunta): IdPath<String>,
) -> AppResult<Json<Vec<Cuestionario>>> {
    let rows = CuestionarioRepo::search_by_pregunta(&state.pool, &pregunta).await?;
    Ok(Json(rows))
}

/// PUT /cuestionarios/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateCuestionario>,
) -> AppResult<Json<Cuestionario>> {
    let cuestionario = CuestionarioRepo::update(&state.pool, id, &UpdateCuestionario::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(cuestionario_id = id, "Cuestionario replaced");
    Ok(Json(cuestionario))
}

/// PATCH /cuestionarios/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateCuestionario>,
) -> AppResult<Json<Cuestionario>> {
    let cuestionario = CuestionarioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(cuestionario_id = id, "Cuestionario updated");
    Ok(Json(cuestionario))
}

/// DELETE /cuestionarios/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if CuestionarioRepo::delete(&state.pool, id).await? {
        tracing::info!(cuestionario_id = id, "Cuestionario deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
