//! Route definitions for the `/proyectoacademico` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::proyecto_academico;
use crate::state::AppState;

/// Routes mounted at `/proyectoacademico`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /jefes                         -> list_jefes
/// GET    /project/{id}                  -> list_by_proyecto
/// DELETE /project/{id}                  -> delete_by_proyecto
/// GET    /academico/{id}                -> list_by_academico
/// DELETE /academico/{id}                -> delete_by_academico
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> replace
/// PATCH  /{id}                          -> update
/// DELETE /{id}                          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(proyecto_academico::list).post(proyecto_academico::create))
        .route("/jefes", get(proyecto_academico::list_jefes))
        .route(
            "/project/{id}",
            get(proyecto_academico::list_by_proyecto).delete(proyecto_academico::delete_by_proyecto),
        )
        .route(
            "/academico/{id}",
            get(proyecto_academico::list_by_academico)
                .delete(proyecto_academico::delete_by_academico),
        )
        .route(
            "/{id}",
            get(proyecto_academico::get_by_id)
                .put(proyecto_academico::replace)
                .patch(proyecto_academico::update)
                .delete(proyecto_academico::delete),
        )
}
