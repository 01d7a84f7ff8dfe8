//! Handlers for the `/tematicas` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::tematica::{CreateTematica, Tematica, UpdateTematica};
use idi_db::repositories::TematicaRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, SearchQuery, ValidJson};
use crate::query::NameParams;
use crate::state::AppState;

const ENTITY: &str = "Tematica";

/// POST /tematicas
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTematica>,
) -> AppResult<(StatusCode, Json<Tematica>)> {
    let tematica = TematicaRepo::create(&state.pool, &input).await?;
    tracing::info!(tematica_id = tematica.id_tematica, "Tematica created");
    Ok((StatusCode::CREATED, Json(tematica)))
}

/// GET /tematicas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Tematica>>> {
    let rows = TematicaRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /tematicas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Tematica>> {
    let tematica = TematicaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(tematica))
}

/// GET /tematicas/search?name=
pub async fn search(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery<NameParams>,
) -> AppResult<Json<Vec<Tematica>>> {
    let rows = TematicaRepo::search_by_nombre(&state.pool, &params.name).await?;
    Ok(Json(rows))
}

/// PUT /tematicas/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateTematica>,
) -> AppResult<Json<Tematica>> {
    let tematica = TematicaRepo::update(&state.pool, id, &UpdateTematica::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(tematica_id = id, "Tematica replaced");
    Ok(Json(tematica))
}

/// PATCH /tematicas/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateTematica>,
) -> AppResult<Json<Tematica>> {
    let tematica = TematicaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(tematica_id = id, "Tematica updated");
    Ok(Json(tematica))
}

/// DELETE /tematicas/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if TematicaRepo::delete(&state.pool, id).await? {
        tracing::info!(tematica_id = id, "Tematica deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
