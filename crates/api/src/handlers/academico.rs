//! Handlers for the `/academicos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::academico::{Academico, CreateAcademico, UpdateAcademico};
use idi_db::repositories::AcademicoRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "Academico";

/// POST /academicos
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateAcademico>,
) -> AppResult<(StatusCode, Json<Academico>)> {
    let academico = AcademicoRepo::create(&state.pool, &input).await?;
    tracing::info!(academico_id = academico.id_academico, "Academico created");
    Ok((StatusCode::CREATED, Json(academico)))
}

/// GET /academicos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Academico>>> {
    let academicos = AcademicoRepo::list(&state.pool).await?;
    Ok(Json(academicos))
}

/// GET /academicos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Academico>> {
    let academico = AcademicoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(academico))
}

/// GET /academicos/buscar/{termino}
pub async fn search(
    State(state): State<AppState>,
    IdPath(termino): IdPath<String>,
) -> AppResult<Json<Vec<Academico>>> {
    let academicos = AcademicoRepo::search(&state.pool, &termino).await?;
    Ok(Json(academicos))
}

/// PUT /academicos/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateAcademico>,
) -> AppResult<Json<Academico>> {
    let academico = AcademicoRepo::update(&state.pool, id, &input.into())
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(academico_id = id, "Academico replaced");
    Ok(Json(academico))
}

/// PATCH /academicos/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateAcademico>,
) -> AppResult<Json<Academico>> {
    let academico = AcademicoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(academico_id = id, "Academico updated");
    Ok(Json(academico))
}

/// DELETE /academicos/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if AcademicoRepo::delete(&state.pool, id).await? {
        tracing::info!(academico_id = id, "Academico deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
