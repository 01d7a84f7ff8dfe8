//! Handlers for the `/proyectos` resource and its read views.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_core::validation::validate_lead_flag;
use idi_db::models::proyecto::{
    AcademicosPorProyecto, CreateProyecto, CreateProyectoConAcademicos, Proyecto,
    ProyectoConAcademicos, ProyectoDetalle, UpdateProyecto,
};
use idi_db::repositories::ProyectoRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, SearchQuery, ValidJson};
use crate::query::NameParams;
use crate::state::AppState;

const ENTITY: &str = "Proyecto";

/// POST /proyectos
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProyecto>,
) -> AppResult<(StatusCode, Json<Proyecto>)> {
    let proyecto = ProyectoRepo::create(&state.pool, &input).await?;
    tracing::info!(proyecto_id = proyecto.id_proyecto, "Proyecto created");
    Ok((StatusCode::CREATED, Json(proyecto)))
}

/// POST /proyectos/con-academicos
///
/// Creates the project and all of its researcher assignments atomically.
pub async fn create_con_academicos(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProyectoConAcademicos>,
) -> AppResult<(StatusCode, Json<ProyectoConAcademicos>)> {
    for asignacion in &input.academicos {
        validate_lead_flag(Some(asignacion.jefe))?;
    }
    let created = ProyectoRepo::create_con_academicos(&state.pool, &input).await?;
    tracing::info!(
        proyecto_id = created.proyecto.id_proyecto,
        academicos = created.asignaciones.len(),
        "Proyecto created with academicos"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /proyectos and GET /proyectos/crudo
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Proyecto>>> {
    let proyectos = ProyectoRepo::list(&state.pool).await?;
    Ok(Json(proyectos))
}

/// GET /proyectos/data
pub async fn list_detalle(State(state): State<AppState>) -> AppResult<Json<Vec<ProyectoDetalle>>> {
    let proyectos = ProyectoRepo::list_detalle(&state.pool).await?;
    Ok(Json(proyectos))
}

/// GET /proyectos/academicos
pub async fn list_academicos(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AcademicosPorProyecto>>> {
    let rows = ProyectoRepo::list_academicos(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /proyectos/{id}/academicos
pub async fn get_academicos(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<AcademicosPorProyecto>> {
    let row = ProyectoRepo::find_academicos(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// GET /proyectos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Proyecto>> {
    let proyecto = ProyectoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(proyecto))
}

/// GET /proyectos/status/{id_estatus}
pub async fn list_by_estatus(
    State(state): State<AppState>,
    IdPath(id_estatus): IdPath<DbId>,
) -> AppResult<Json<Vec<Proyecto>>> {
    let proyectos = ProyectoRepo::list_by_estatus(&state.pool, id_estatus).await?;
    Ok(Json(proyectos))
}

/// GET /proyectos/convocatoria/{nombre}
pub async fn search_by_convocatoria(
    State(state): State<AppState>,
    IdPath(nombre): IdPath<String>,
) -> AppResult<Json<Vec<Proyecto>>> {
    let proyectos = ProyectoRepo::search_by_convocatoria(&state.pool, &nombre).await?;
    Ok(Json(proyectos))
}

/// GET /proyectos/search?name=
pub async fn search(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery<NameParams>,
) -> AppResult<Json<Vec<Proyecto>>> {
    let proyectos = ProyectoRepo::search_by_nombre(&state.pool, &params.name).await?;
    Ok(Json(proyectos))
}

/// PUT /proyectos/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateProyecto>,
) -> AppResult<Json<Proyecto>> {
    let proyecto = ProyectoRepo::update(&state.pool, id, &UpdateProyecto::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(proyecto_id = id, "Proyecto replaced");
    Ok(Json(proyecto))
}

/// PATCH /proyectos/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateProyecto>,
) -> AppResult<Json<Proyecto>> {
    let proyecto = ProyectoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(proyecto_id = id, "Proyecto updated");
    Ok(Json(proyecto))
}

/// DELETE /proyectos/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if ProyectoRepo::delete(&state.pool, id).await? {
        tracing::info!(proyecto_id = id, "Proyecto deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
