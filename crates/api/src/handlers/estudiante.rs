//! Handlers for the `/estudiantes` resource and project rosters.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::estudiante::{
    CreateEstudiante, Estudiante, EstudianteEnProyecto, UpdateEstudiante,
};
use idi_db::repositories::{EstudianteRepo, ProyectoRepo};

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "Estudiante";

/// POST /estudiantes
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateEstudiante>,
) -> AppResult<(StatusCode, Json<Estudiante>)> {
    let estudiante = EstudianteRepo::create(&state.pool, &input).await?;
    tracing::info!(estudiante_id = estudiante.id_estudiantes, "Estudiante created");
    Ok((StatusCode::CREATED, Json(estudiante)))
}

/// GET /estudiantes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Estudiante>>> {
    let rows = EstudianteRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /estudiantes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Estudiante>> {
    let estudiante = EstudianteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(estudiante))
}

/// PUT /estudiantes/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateEstudiante>,
) -> AppResult<Json<Estudiante>> {
    let estudiante = EstudianteRepo::update(&state.pool, id, &UpdateEstudiante::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(estudiante_id = id, "Estudiante replaced");
    Ok(Json(estudiante))
}

/// PATCH /estudiantes/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateEstudiante>,
) -> AppResult<Json<Estudiante>> {
    let estudiante = EstudianteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(estudiante_id = id, "Estudiante updated");
    Ok(Json(estudiante))
}

/// DELETE /estudiantes/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if EstudianteRepo::delete(&state.pool, id).await? {
        tracing::info!(estudiante_id = id, "Estudiante deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}

/// GET /estudiantes/por-proyecto/{id_proyecto}
pub async fn list_by_proyecto(
    State(state): State<AppState>,
    IdPath(id_proyecto): IdPath<DbId>,
) -> AppResult<Json<Vec<EstudianteEnProyecto>>> {
    ProyectoRepo::find_by_id(&state.pool, id_proyecto)
        .await?
        .ok_or_else(|| CoreError::not_found("Proyecto", id_proyecto))?;
    let rows = EstudianteRepo::list_by_proyecto(&state.pool, id_proyecto).await?;
    Ok(Json(rows))
}

/// POST /estudiantes/por-proyecto/{id_proyecto}/{id_estudiante}
///
/// Both ends must exist; linking twice is a no-op.
pub async fn link_proyecto(
    State(state): State<AppState>,
    IdPath((id_proyecto, id_estudiante)): IdPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ProyectoRepo::find_by_id(&state.pool, id_proyecto)
        .await?
        .ok_or_else(|| CoreError::not_found("Proyecto", id_proyecto))?;
    EstudianteRepo::find_by_id(&state.pool, id_estudiante)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id_estudiante))?;
    EstudianteRepo::link_proyecto(&state.pool, id_proyecto, id_estudiante).await?;
    tracing::info!(proyecto_id = id_proyecto, estudiante_id = id_estudiante, "Estudiante linked");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /estudiantes/por-proyecto/{id_proyecto}/{id_estudiante}
pub async fn unlink_proyecto(
    State(state): State<AppState>,
    IdPath((id_proyecto, id_estudiante)): IdPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if EstudianteRepo::unlink_proyecto(&state.pool, id_proyecto, id_estudiante).await? {
        tracing::info!(proyecto_id = id_proyecto, estudiante_id = id_estudiante, "Estudiante unlinked");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id_estudiante).into())
    }
}
