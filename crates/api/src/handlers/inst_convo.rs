//! Handlers for the `/inst-convo` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::inst_convo::{CreateInstConvo, InstConvo, UpdateInstConvo};
use idi_db::repositories::InstConvoRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, SearchQuery, ValidJson};
use crate::query::NombreParams;
use crate::state::AppState;

const ENTITY: &str = "InstConvo";

/// POST /inst-convo
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateInstConvo>,
) -> AppResult<(StatusCode, Json<InstConvo>)> {
    let inst_convo = InstConvoRepo::create(&state.pool, &input).await?;
    tracing::info!(inst_convo_id = inst_convo.id, "InstConvo created");
    Ok((StatusCode::CREATED, Json(inst_convo)))
}

/// GET /inst-convo
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<InstConvo>>> {
    let rows = InstConvoRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /inst-convo/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<InstConvo>> {
    let inst_convo = InstConvoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(inst_convo))
}

/// GET /inst-convo/search?nombre=
pub async fn search(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery<NombreParams>,
) -> AppResult<Json<Vec<InstConvo>>> {
    let rows = InstConvoRepo::search_by_nombre(&state.pool, &params.nombre).await?;
    Ok(Json(rows))
}

/// PUT /inst-convo/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateInstConvo>,
) -> AppResult<Json<InstConvo>> {
    let inst_convo = InstConvoRepo::update(&state.pool, id, &UpdateInstConvo::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(inst_convo_id = id, "InstConvo replaced");
    Ok(Json(inst_convo))
}

/// PATCH /inst-convo/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateInstConvo>,
) -> AppResult<Json<InstConvo>> {
    let inst_convo = InstConvoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(inst_convo_id = id, "InstConvo updated");
    Ok(Json(inst_convo))
}

/// DELETE /inst-convo/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if InstConvoRepo::delete(&state.pool, id).await? {
        tracing::info!(inst_convo_id = id, "InstConvo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
