//! Handlers for the `/fondos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::fondo::{CreateFondo, Fondo, UpdateFondo};
use idi_db::repositories::FondoRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, SearchQuery, ValidJson};
use crate::query::NombreParams;
use crate::state::AppState;

const ENTITY: &str = "Fondo";

/// POST /fondos
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateFondo>,
) -> AppResult<(StatusCode, Json<Fondo>)> {
    let fondo = FondoRepo::create(&state.pool, &input).await?;
    tracing::info!(fondo_id = fondo.id, "Fondo created");
    Ok((StatusCode::CREATED, Json(fondo)))
}

/// GET /fondos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Fondo>>> {
    let rows = FondoRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /fondos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Fondo>> {
    let fondo = FondoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(fondo))
}

/// GET /fondos/search?nombre=
pub async fn search(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery<NombreParams>,
) -> AppResult<Json<Vec<Fondo>>> {
    let rows = FondoRepo::search_by_nombre(&state.pool, &params.nombre).await?;
    Ok(Json(rows))
}

/// PUT /fondos/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateFondo>,
) -> AppResult<Json<Fondo>> {
    let fondo = FondoRepo::update(&state.pool, id, &UpdateFondo::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(fondo_id = id, "Fondo replaced");
    Ok(Json(fondo))
}

/// PATCH /fondos/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateFondo>,
) -> AppResult<Json<Fondo>> {
    let fondo = FondoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(fondo_id = id, "Fondo updated");
    Ok(Json(fondo))
}

/// DELETE /fondos/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if FondoRepo::delete(&state.pool, id).await? {
        tracing::info!(fondo_id = id, "Fondo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
