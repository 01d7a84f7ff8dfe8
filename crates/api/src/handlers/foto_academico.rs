//! Handlers for researcher photos, nested under `/academicos/{id}/fotos`.
//!
//! Every single-photo route first checks that the researcher exists and
//! that the photo belongs to them; a photo of another researcher is reported
//! as not found.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::academico::{CreateFotoAcademico, FotoAcademico, UpdateFotoAcademico};
use idi_db::repositories::{AcademicoRepo, FotoAcademicoRepo};
use idi_db::DbPool;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "FotoAcademico";

async fn ensure_academico(pool: &DbPool, id_academico: DbId) -> AppResult<()> {
    AcademicoRepo::find_by_id(pool, id_academico)
        .await?
        .ok_or_else(|| CoreError::not_found("Academico", id_academico))?;
    Ok(())
}

async fn owned_foto(pool: &DbPool, id_academico: DbId, id_imagen: DbId) -> AppResult<FotoAcademico> {
    ensure_academico(pool, id_academico).await?;
    let foto = FotoAcademicoRepo::find_for_academico(pool, id_academico, id_imagen)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id_imagen))?;
    Ok(foto)
}

/// GET /academicos/fotos-global
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<FotoAcademico>>> {
    let fotos = FotoAcademicoRepo::list_all(&state.pool).await?;
    Ok(Json(fotos))
}

/// GET /academicos/{id}/fotos
pub async fn list_by_academico(
    State(state): State<AppState>,
    IdPath(id_academico): IdPath<DbId>,
) -> AppResult<Json<Vec<FotoAcademico>>> {
    ensure_academico(&state.pool, id_academico).await?;
    let fotos = FotoAcademicoRepo::list_by_academico(&state.pool, id_academico).await?;
    Ok(Json(fotos))
}

/// POST /academicos/{id}/fotos
pub async fn create(
    State(state): State<AppState>,
    IdPath(id_academico): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateFotoAcademico>,
) -> AppResult<(StatusCode, Json<FotoAcademico>)> {
    ensure_academico(&state.pool, id_academico).await?;
    let foto = FotoAcademicoRepo::create(&state.pool, id_academico, &input).await?;
    tracing::info!(academico_id = id_academico, foto_id = foto.id_imagen, "Foto created");
    Ok((StatusCode::CREATED, Json(foto)))
}

/// GET /academicos/{id}/fotos/{foto_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath((id_academico, id_imagen)): IdPath<(DbId, DbId)>,
) -> AppResult<Json<FotoAcademico>> {
    let foto = owned_foto(&state.pool, id_academico, id_imagen).await?;
    Ok(Json(foto))
}

/// PATCH /academicos/{id}/fotos/{foto_id}
pub async fn update(
    State(state): State<AppState>,
    IdPath((id_academico, id_imagen)): IdPath<(DbId, DbId)>,
    ValidJson(input): ValidJson<UpdateFotoAcademico>,
) -> AppResult<Json<FotoAcademico>> {
    owned_foto(&state.pool, id_academico, id_imagen).await?;
    let foto = FotoAcademicoRepo::update(&state.pool, id_imagen, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id_imagen))?;
    tracing::info!(academico_id = id_academico, foto_id = id_imagen, "Foto updated");
    Ok(Json(foto))
}

/// DELETE /academicos/{id}/fotos/{foto_id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath((id_academico, id_imagen)): IdPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_academico(&state.pool, id_academico).await?;
    if FotoAcademicoRepo::delete(&state.pool, id_academico, id_imagen).await? {
        tracing::info!(academico_id = id_academico, foto_id = id_imagen, "Foto deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id_imagen).into())
    }
}
