//! Handlers for the `/respuestas-cuestionario` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::respuesta_cuestionario::{
    CreateRespuestaCuestionario, RespuestaCuestionario, UpdateRespuestaCuestionario,
};
use idi_db::repositories::RespuestaCuestionarioRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "RespuestaCuestionario";

/// POST /respuestas-cuestionario
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateRespuestaCuestionario>,
) -> AppResult<(StatusCode, Json<RespuestaCuestionario>)> {
    let respuesta = RespuestaCuestionarioRepo::create(&state.pool, &input).await?;
    tracing::info!(respuesta_id = respuesta.id, "RespuestaCuestionario created");
    Ok((StatusCode::CREATED, Json(respuesta)))
}

/// GET /respuestas-cuestionario
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<RespuestaCuestionario>>> {
    let rows = RespuestaCuestionarioRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /respuestas-cuestionario/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<RespuestaCuestionario>> {
    let respuesta = RespuestaCuestionarioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(respuesta))
}

/// GET /respuestas-cuestionario/investigador/{id}
///
/// Answer sheets filled in by one researcher, oldest first.
pub async fn list_by_investigador(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Vec<RespuestaCuestionario>>> {
    let rows = RespuestaCuestionarioRepo::list_by_investigador(&state.pool, id).await?;
    Ok(Json(rows))
}

/// GET /respuestas-cuestionario/escuela/{id}
pub async fn list_by_escuela(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Vec<RespuestaCuestionario>>> {
    let rows = RespuestaCuestionarioRepo::list_by_escuela(&state.pool, id).await?;
    Ok(Json(rows))
}

/// PUT /respuestas-cuestionario/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateRespuestaCuestionario>,
) -> AppResult<Json<RespuestaCuestionario>> {
    let respuesta = RespuestaCuestionarioRepo::update(&state.pool, id, &UpdateRespuestaCuestionario::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(respuesta_id = id, "RespuestaCuestionario replaced");
    Ok(Json(respuesta))
}

/// PATCH /respuestas-cuestionario/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateRespuestaCuestionario>,
) -> AppResult<Json<RespuestaCuestionario>> {
    let respuesta = RespuestaCuestionarioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(respuesta_id = id, "RespuestaCuestionario updated");
    Ok(Json(respuesta))
}

/// DELETE /respuestas-cuestionario/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if RespuestaCuestionarioRepo::delete(&state.pool, id).await? {
        tracing::info!(respuesta_id = id, "RespuestaCuestionario deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
