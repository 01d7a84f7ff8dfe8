//! Route definitions for the `/apoyos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::apoyo;
use crate::state::AppState;

/// Routes mounted at `/apoyos`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /buscar/tipo/{tipo}     -> search_by_tipo
/// GET    /buscar/detalle/{detalle} -> search_by_detalle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(apoyo::list).post(apoyo::create))
        .route("/buscar/tipo/{tipo}", get(apoyo::search_by_tipo))
        .route("/buscar/detalle/{detalle}", get(apoyo::search_by_detalle))
        .route(
            "/{id}",
            get(apoyo::get_by_id)
                .put(apoyo::replace)
                .patch(apoyo::update)
                .delete(apoyo::delete),
        )
}
