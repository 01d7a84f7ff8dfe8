//! Handlers for the `/convocatorias` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::convocatoria::{CreateConvocatoria, Convocatoria, UpdateConvocatoria};
use idi_db::repositories::ConvocatoriaRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "Convocatoria";

/// POST /convocatorias
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateConvocatoria>,
) -> AppResult<(StatusCode, Json<Convocatoria>)> {
    let convocatoria = ConvocatoriaRepo::create(&state.pool, &input).await?;
    tracing::info!(convocatoria_id = convocatoria.id_convocatoria, "Convocatoria created");
    Ok((StatusCode::CREATED, Json(convocatoria)))
}

/// GET /convocatorias
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Convocatoria>>> {
    let rows = ConvocatoriaRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /convocatorias/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Convocatoria>> {
    let convocatoria = ConvocatoriaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(convocatoria))
}

/// GET /convocatorias/buscar/nombre/{nombre}
pub async fn search_by_nombre(
    State(state): State<AppState>,
    IdPath(nombre): IdPath<String>,
) -> AppResult<Json<Vec<Convocatoria>>> {
    let rows = ConvocatoriaRepo::search_by_nombre(&state.pool, &nombre).await?;
    Ok(Json(rows))
}

/// GET /convocatorias/tipo/{tipo}
pub async fn list_by_tipo(
    State(state): State<AppState>,
    IdPath(tipo): IdPath<DbId>,
) -> AppResult<Json<Vec<Convocatoria>>> {
    let rows = ConvocatoriaRepo::list_by_tipo(&state.pool, tipo).await?;
    Ok(Json(rows))
}

/// GET /convocatorias/institucion/{id}
pub async fn list_by_institucion(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Vec<Convocatoria>>> {
    let rows = ConvocatoriaRepo::list_by_institucion(&state.pool, id).await?;
    Ok(Json(rows))
}

/// PUT /convocatorias/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateConvocatoria>,
) -> AppResult<Json<Convocatoria>> {
    let convocatoria = ConvocatoriaRepo::update(&state.pool, id, &UpdateConvocatoria::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(convocatoria_id = id, "Convocatoria replaced");
    Ok(Json(convocatoria))
}

/// PATCH /convocatorias/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateConvocatoria>,
) -> AppResult<Json<Convocatoria>> {
    let convocatoria = ConvocatoriaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(convocatoria_id = id, "Convocatoria updated");
    Ok(Json(convocatoria))
}

/// DELETE /convocatorias/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if ConvocatoriaRepo::delete(&state.pool, id).await? {
        tracing::info!(convocatoria_id = id, "Convocatoria deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
