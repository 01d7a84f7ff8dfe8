//! Route definitions for the `/tipo-convo` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tipo_convo;
use crate::state::AppState;

/// Routes mounted at `/tipo-convo`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /search?name=           -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tipo_convo::list).post(tipo_convo::create))
        .route("/search", get(tipo_convo::search))
        .route(
            "/{id}",
            get(tipo_convo::get_by_id)
                .put(tipo_convo::replace)
                .patch(tipo_convo::update)
                .delete(tipo_convo::delete),
        )
}
