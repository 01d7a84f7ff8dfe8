//! Route definitions for the `/academicos` resource.
//!
//! Also nests the researcher photo routes under `/academicos/{id}/fotos`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{academico, foto_academico};
use crate::state::AppState;

/// Routes mounted at `/academicos`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /buscar/{termino}              -> search
/// GET    /fotos-global                  -> foto_academico::list_all
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> replace
/// PATCH  /{id}                          -> update
/// DELETE /{id}                          -> delete
///
/// GET    /{id}/fotos                    -> foto_academico::list_by_academico
/// POST   /{id}/fotos                    -> foto_academico::create
/// GET    /{id}/fotos/{foto_id}          -> foto_academico::get_by_id
/// PATCH  /{id}/fotos/{foto_id}          -> foto_academico::update
/// DELETE /{id}/fotos/{foto_id}          -> foto_academico::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(academico::list).post(academico::create))
        .route("/buscar/{termino}", get(academico::search))
        .route("/fotos-global", get(foto_academico::list_all))
        .route(
            "/{id}",
            get(academico::get_by_id)
                .put(academico::replace)
                .patch(academico::update)
                .delete(academico::delete),
        )
        .route(
            "/{id}/fotos",
            get(foto_academico::list_by_academico).post(foto_academico::create),
        )
        .route(
            "/{id}/fotos/{foto_id}",
            get(foto_academico::get_by_id)
                .patch(foto_academico::update)
                .delete(foto_academico::delete),
        )
}
