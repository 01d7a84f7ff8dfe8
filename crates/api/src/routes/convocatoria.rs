//! Route definitions for the `/convocatorias` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::convocatoria;
use crate::state::AppState;

/// Routes mounted at `/convocatorias`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /buscar/nombre/{nombre} -> search_by_nombre
/// GET    /tipo/{tipo}            -> list_by_tipo
/// GET    /institucion/{id}       -> list_by_institucion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(convocatoria::list).post(convocatoria::create))
        .route("/buscar/nombre/{nombre}", get(convocatoria::search_by_nombre))
        .route("/tipo/{tipo}", get(convocatoria::list_by_tipo))
        .route("/institucion/{id}", get(convocatoria::list_by_institucion))
        .route(
            "/{id}",
            get(convocatoria::get_by_id)
                .put(convocatoria::replace)
                .patch(convocatoria::update)
                .delete(convocatoria::delete),
        )
}
