//! Route definitions for the `/estudiantes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::estudiante;
use crate::state::AppState;

/// Routes mounted at `/estudiantes`.
///
/// ```text
/// GET    /                                          -> list
/// POST   /                                          -> create
/// GET    /por-proyecto/{id_proyecto}                -> list_by_proyecto
/// POST   /por-proyecto/{id_proyecto}/{id_estudiante} -> link_proyecto
/// DELETE /por-proyecto/{id_proyecto}/{id_estudiante} -> unlink_proyecto
/// GET    /{id}                                      -> get_by_id
/// PUT    /{id}                                      -> replace
/// PATCH  /{id}                                      -> update
/// DELETE /{id}                                      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(estudiante::list).post(estudiante::create))
        .route("/por-proyecto/{id_proyecto}", get(estudiante::list_by_proyecto))
        .route(
            "/por-proyecto/{id_proyecto}/{id_estudiante}",
            post(estudiante::link_proyecto).delete(estudiante::unlink_proyecto),
        )
        .route(
            "/{id}",
            get(estudiante::get_by_id)
                .put(estudiante::replace)
                .patch(estudiante::update)
                .delete(estudiante::delete),
        )
}
