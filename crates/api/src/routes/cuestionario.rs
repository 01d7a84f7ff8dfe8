//! Route definitions for the `/cuestionarios` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cuestionario;
use crate::state::AppState;

/// Routes mounted at `/cuestionarios`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /buscar/{pregunta}      -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cuestionario::list).post(cuestionario::create))
        .route("/buscar/{pregunta}", get(cuestionario::search))
        .route(
            "/{id}",
            get(cuestionario::get_by_id)
                .put(cuestionario::replace)
                .patch(cuestionario::update)
                .delete(cuestionario::delete),
        )
}
