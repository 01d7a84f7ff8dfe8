//! Handlers for the `/kth` resource (readiness assessments).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::kth::{CreateKth, Kth, UpdateKth};
use idi_db::repositories::KthRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "Kth";

/// POST /kth
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateKth>,
) -> AppResult<(StatusCode, Json<Kth>)> {
    let kth = KthRepo::create(&state.pool, &input).await?;
    tracing::info!(kth_id = kth.id_kth, proyecto_id = kth.id_proyecto, "Kth created");
    Ok((StatusCode::CREATED, Json(kth)))
}

/// GET /kth
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Kth>>> {
    let rows = KthRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /kth/{id}
pub async fn get_by_id(State(state): State<AppState>, IdPath(id): IdPath<DbId>) -> AppResult<Json<Kth>> {
    let kth = KthRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(kth))
}

/// GET /kth/project/{id_proyecto}
pub async fn get_by_proyecto(
    State(state): State<AppState>,
    IdPath(id_proyecto): IdPath<DbId>,
) -> AppResult<Json<Kth>> {
    let kth = KthRepo::find_by_proyecto(&state.pool, id_proyecto)
        .await?
        .ok_or_else(|| CoreError::not_found("Proyecto", id_proyecto))?;
    Ok(Json(kth))
}

/// PUT /kth/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateKth>,
) -> AppResult<Json<Kth>> {
    let kth = KthRepo::update(&state.pool, id, &UpdateKth::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(kth_id = id, "Kth replaced");
    Ok(Json(kth))
}

/// PATCH /kth/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateKth>,
) -> AppResult<Json<Kth>> {
    let kth = KthRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(kth_id = id, "Kth updated");
    Ok(Json(kth))
}

/// DELETE /kth/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath<DbId>) -> AppResult<StatusCode> {
    if KthRepo::delete(&state.pool, id).await? {
        tracing::info!(kth_id = id, "Kth deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}

/// DELETE /kth/project/{id_proyecto}
pub async fn delete_by_proyecto(
    State(state): State<AppState>,
    IdPath(id_proyecto): IdPath<DbId>,
) -> AppResult<StatusCode> {
    let removed = KthRepo::delete_by_proyecto(&state.pool, id_proyecto).await?;
    if removed == 0 {
        return Err(CoreError::not_found("Proyecto", id_proyecto).into());
    }
    tracing::info!(proyecto_id = id_proyecto, removed, "Kth removed from proyecto");
    Ok(StatusCode::NO_CONTENT)
}
