//! Handlers for the `/tipo-convo` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::tipo_convo::{CreateTipoConvo, TipoConvo, UpdateTipoConvo};
use idi_db::repositories::TipoConvoRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, SearchQuery, ValidJson};
use crate::query::NameParams;
use crate::state::AppState;

const ENTITY: &str = "TipoConvo";

/// POST /tipo-convo
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTipoConvo>,
) -> AppResult<(StatusCode, Json<TipoConvo>)> {
    let tipo_convo = TipoConvoRepo::create(&state.pool, &input).await?;
    tracing::info!(tipo_convo_id = tipo_convo.id, "TipoConvo created");
    Ok((StatusCode::CREATED, Json(tipo_convo)))
}

/// GET /tipo-convo
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TipoConvo>>> {
    let rows = TipoConvoRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /tipo-convo/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<TipoConvo>> {
    let tipo_convo = TipoConvoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(tipo_convo))
}

/// GET /tipo-convo/search?name=
pub async fn search(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery<NameParams>,
) -> AppResult<Json<Vec<TipoConvo>>> {
    let rows = TipoConvoRepo::search_by_nombre(&state.pool, &params.name).await?;
    Ok(Json(rows))
}

/// PUT /tipo-convo/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateTipoConvo>,
) -> AppResult<Json<TipoConvo>> {
    let tipo_convo = TipoConvoRepo::update(&state.pool, id, &UpdateTipoConvo::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(tipo_convo_id = id, "TipoConvo replaced");
    Ok(Json(tipo_convo))
}

/// PATCH /tipo-convo/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateTipoConvo>,
) -> AppResult<Json<TipoConvo>> {
    let tipo_convo = TipoConvoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(tipo_convo_id = id, "TipoConvo updated");
    Ok(Json(tipo_convo))
}

/// DELETE /tipo-convo/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if TipoConvoRepo::delete(&state.pool, id).await? {
        tracing::info!(tipo_convo_id = id, "TipoConvo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
