//! Route definitions for the `/fondos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::fondo;
use crate::state::AppState;

/// Routes mounted at `/fondos`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /search?nombre=         -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fondo::list).post(fondo::create))
        .route("/search", get(fondo::search))
        .route(
            "/{id}",
            get(fondo::get_by_id)
                .put(fondo::replace)
                .patch(fondo::update)
                .delete(fondo::delete),
        )
}
