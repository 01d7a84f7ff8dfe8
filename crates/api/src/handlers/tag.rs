//! Handlers for the `/tags` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idi_core::error::CoreError;
use idi_core::types::DbId;
use idi_db::models::tag::{CreateTag, Tag, UpdateTag};
use idi_db::repositories::TagRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

const ENTITY: &str = "Tag";

/// POST /tags
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTag>,
) -> AppResult<(StatusCode, Json<Tag>)> {
    let tag = TagRepo::create(&state.pool, &input).await?;
    tracing::info!(tag_id = tag.id_apoyo, "Tag created");
    Ok((StatusCode::CREATED, Json(tag)))
}

/// GET /tags
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Tag>>> {
    let rows = TagRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /tags/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Tag>> {
    let tag = TagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(tag))
}

/// GET /tags/search/{tag}
pub async fn search(
    State(state): State<AppState>,
    IdPath(tag): IdPath<String>,
) -> AppResult<Json<Vec<Tag>>> {
    let rows = TagRepo::search(&state.pool, &tag).await?;
    Ok(Json(rows))
}

/// PUT /tags/{id}
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<CreateTag>,
) -> AppResult<Json<Tag>> {
    let tag = TagRepo::update(&state.pool, id, &UpdateTag::from(input))
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(tag_id = id, "Tag replaced");
    Ok(Json(tag))
}

/// PATCH /tags/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidJson(input): ValidJson<UpdateTag>,
) -> AppResult<Json<Tag>> {
    let tag = TagRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(tag_id = id, "Tag updated");
    Ok(Json(tag))
}

/// DELETE /tags/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if TagRepo::delete(&state.pool, id).await? {
        tracing::info!(tag_id = id, "Tag deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
