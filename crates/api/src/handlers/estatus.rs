//! Handlers for the `/estatus` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::estatus::{CreateEstatus, Estatus, UpdateEstatus};
use idi_db::repositories::EstatusRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "Estatus";

/// POST /estatus
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateEstatus>,
) -> AppResult<(StatusCode, Json<Estatus>)> {
    let estatus = EstatusRepo::create(&state.pool, &input).await?;
    tracing::info!(estatus_id = estatus.id_estatus, "Estatus created");
    Ok((StatusCode::CREATED, Json(estatus)))
}

/// GET /estatus
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Estatus>>> {
    let rows = EstatusRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /estatus/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Estatus>> {
    let estatus = EstatusRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(estatus))
}

/// GET /estatus/search/{tipo}
pub async fn search(
    State(state): State<AppState>,
    IdPath(tipo): IdPath<String>,
) -> AppResult<Json<Vec<Estatus>>> {
    let rows = EstatusRepo::search_by_tipo(&state.pool, &tipo).await?;
    Ok(Json(rows))
}

/// PUT /estatus/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateEstatus>,
) -> AppResult<Json<Estatus>> {
    let estatus = EstatusRepo::update(&state.pool, id, &UpdateEstatus::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(estatus_id = id, "Estatus replaced");
    Ok(Json(estatus))
}

/// PATCH /estatus/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateEstatus>,
) -> AppResult<Json<Estatus>> {
    let estatus = EstatusRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(estatus_id = id, "Estatus updated");
    Ok(Json(estatus))
}

/// DELETE /estatus/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if EstatusRepo::delete(&state.pool, id).await? {
        tracing::info!(estatus_id = id, "Estatus deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
