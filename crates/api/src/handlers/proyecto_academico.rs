//! Handlers for the `/proyectoacademico` resource (project assignments).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::patch::Patch;
use idi_core::types::DbId;
use idi_core::validation::validate_lead_flag;
use idi_db::models::proyecto_academico::{
    CreateProyectoAcademico, ProyectoAcademico, UpdateProyectoAcademico,
};
use idi_db::repositories::ProyectoAcademicoRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "ProyectoAcademico";

/// POST /proyectoacademico
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProyectoAcademico>,
) -> AppResult<(StatusCode, Json<ProyectoAcademico>)> {
    validate_lead_flag(input.jefe)?;
    let asignacion = ProyectoAcademicoRepo::create(&state.pool, &input).await?;
    tracing::info!(
        asignacion_id = asignacion.id,
        proyecto_id = ?asignacion.id_proyecto,
        academico_id = ?asignacion.id_academico,
        "Academico assigned to proyecto"
    );
    Ok((StatusCode::CREATED, Json(asignacion)))
}

/// GET /proyectoacademico
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProyectoAcademico>>> {
    let rows = ProyectoAcademicoRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /proyectoacademico/jefes
pub async fn list_jefes(State(state): State<AppState>) -> AppResult<Json<Vec<ProyectoAcademico>>> {
    let rows = ProyectoAcademicoRepo::list_jefes(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /proyectoacademico/project/{id}
pub async fn list_by_proyecto(
    State(state): State<AppState>,
    IdPath(id_proyecto): IdPath<DbId>,
) -> AppResult<Json<Vec<ProyectoAcademico>>> {
    let rows = ProyectoAcademicoRepo::list_by_proyecto(&state.pool, id_proyecto).await?;
    Ok(Json(rows))
}

/// GET /proyectoacademico/academico/{id}
pub async fn list_by_academico(
    State(state): State<AppState>,
    IdPath(id_academico): IdPath<DbId>,
) -> AppResult<Json<Vec<ProyectoAcademico>>> {
    let rows = ProyectoAcademicoRepo::list_by_academico(&state.pool, id_academico).await?;
    Ok(Json(rows))
}

/// GET /proyectoacademico/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<ProyectoAcademico>> {
    let row = ProyectoAcademicoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// PUT /proyectoacademico/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateProyectoAcademico>,
) -> AppResult<Json<ProyectoAcademico>> {
    validate_lead_flag(input.jefe)?;
    let row = ProyectoAcademicoRepo::update(&state.pool, id, &UpdateProyectoAcademico::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(asignacion_id = id, "ProyectoAcademico replaced");
    Ok(Json(row))
}

/// PATCH /proyectoacademico/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateProyectoAcademico>,
) -> AppResult<Json<ProyectoAcademico>> {
    if let Patch::Value(jefe) = input.jefe {
        validate_lead_flag(Some(jefe))?;
    }
    let row = ProyectoAcademicoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(asignacion_id = id, "ProyectoAcademico updated");
    Ok(Json(row))
}

/// DELETE /proyectoacademico/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if ProyectoAcademicoRepo::delete(&state.pool, id).await? {
        tracing::info!(asignacion_id = id, "ProyectoAcademico deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}

/// DELETE /proyectoacademico/project/{id}
///
/// 404 when the project had no assignments.
pub async fn delete_by_proyecto(
    State(state): State<AppState>,
    IdPath(id_proyecto): IdPath<DbId>,
) -> AppResult<StatusCode> {
    let removed = ProyectoAcademicoRepo::delete_by_proyecto(&state.pool, id_proyecto).await?;
    if removed == 0 {
        return Err(CoreError::not_found("Proyecto", id_proyecto).into());
    }
    tracing::info!(proyecto_id = id_proyecto, removed, "Assignments removed from proyecto");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /proyectoacademico/academico/{id}
pub async fn delete_by_academico(
    State(state): State<AppState>,
    IdPath(id_academico): IdPath<DbId>,
) -> AppResult<StatusCode> {
    let removed = ProyectoAcademicoRepo::delete_by_academico(&state.pool, id_academico).await?;
    if removed == 0 {
        return Err(CoreError::not_found("Academico", id_academico).into());
    }
    tracing::info!(academico_id = id_academico, removed, "Assignments removed from academico");
    Ok(StatusCode::NO_CONTENT)
}
