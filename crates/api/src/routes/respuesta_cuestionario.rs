//! Route definitions for the `/respuestas-cuestionario` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::respuesta_cuestionario;
use crate::state::AppState;

/// Routes mounted at `/respuestas-cuestionario`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /investigador/{id}      -> list_by_investigador
/// GET    /escuela/{id}           -> list_by_escuela
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(respuesta_cuestionario::list).post(respuesta_cuestionario::create))
        .route("/investigador/{id}", get(respuesta_cuestionario::list_by_investigador))
        .route("/escuela/{id}", get(respuesta_cuestionario::list_by_escuela))
        .route(
            "/{id}",
            get(respuesta_cuestionario::get_by_id)
                .put(respuesta_cuestionario::replace)
                .patch(respuesta_cuestionario::update)
                .delete(respuesta_cuestionario::delete),
        )
}
