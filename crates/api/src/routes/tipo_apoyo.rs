//! Route definitions for the `/tipo-apoyo` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tipo_apoyo;
use crate::state::AppState;

/// Routes mounted at `/tipo-apoyo`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /search?tipo=           -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tipo_apoyo::list).post(tipo_apoyo::create))
        .route("/search", get(tipo_apoyo::search))
        .route(
            "/{id}",
            get(tipo_apoyo::get_by_id)
                .put(tipo_apoyo::replace)
                .patch(tipo_apoyo::update)
                .delete(tipo_apoyo::delete),
        )
}
