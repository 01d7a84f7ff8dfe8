//! Route definitions for the `/unidades` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::unidad_academica;
use crate::state::AppState;

/// Routes mounted at `/unidades`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /buscar/{nombre}        -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(unidad_academica::list).post(unidad_academica::create))
        .route("/buscar/{nombre}", get(unidad_academica::search))
        .route(
            "/{id}",
            get(unidad_academica::get_by_id)
                .put(unidad_academica::replace)
                .patch(unidad_academica::update)
                .delete(unidad_academica::delete),
        )
}
