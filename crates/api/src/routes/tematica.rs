//! Route definitions for the `/tematicas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tematica;
use crate::state::AppState;

/// Routes mounted at `/tematicas`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /search?name=           -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tematica::list).post(tematica::create))
        .route("/search", get(tematica::search))
        .route(
            "/{id}",
            get(tematica::get_by_id)
                .put(tematica::replace)
                .patch(tematica::update)
                .delete(tematica::delete),
        )
}
