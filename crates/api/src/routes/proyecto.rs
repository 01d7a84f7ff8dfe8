//! Route definitions for the `/proyectos` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::proyecto;
use crate::state::AppState;

/// Routes mounted at `/proyectos`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /crudo                         -> list
/// GET    /data                          -> list_detalle
/// GET    /academicos                    -> list_academicos
/// GET    /search?name=                  -> search
/// GET    /status/{id_estatus}           -> list_by_estatus
/// GET    /convocatoria/{nombre}         -> search_by_convocatoria
/// POST   /con-academicos                -> create_con_academicos
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> replace
/// PATCH  /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /{id}/academicos               -> get_academicos
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(proyecto::list).post(proyecto::create))
        .route("/crudo", get(proyecto::list))
        .route("/data", get(proyecto::list_detalle))
        .route("/academicos", get(proyecto::list_academicos))
        .route("/search", get(proyecto::search))
        .route("/status/{id_estatus}", get(proyecto::list_by_estatus))
        .route("/convocatoria/{nombre}", get(proyecto::search_by_convocatoria))
        .route("/con-academicos", post(proyecto::create_con_academicos))
        .route(
            "/{id}",
            get(proyecto::get_by_id)
                .put(proyecto::replace)
                .patch(proyecto::update)
                .delete(proyecto::delete),
        )
        .route("/{id}/academicos", get(proyecto::get_academicos))
}
