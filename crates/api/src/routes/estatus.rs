//! Route definitions for the `/estatus` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::estatus;
use crate::state::AppState;

/// Routes mounted at `/estatus`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /search/{tipo}          -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(estatus::list).post(estatus::create))
        .route("/search/{tipo}", get(estatus::search))
        .route(
            "/{id}",
            get(estatus::get_by_id)
                .put(estatus::replace)
                .patch(estatus::update)
                .delete(estatus::delete),
        )
}
