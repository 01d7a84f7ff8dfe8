//! Route definitions for the `/inst-convo` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::inst_convo;
use crate::state::AppState;

/// Routes mounted at `/inst-convo`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /search?nombre=         -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inst_convo::list).post(inst_convo::create))
        .route("/search", get(inst_convo::search))
        .route(
            "/{id}",
            get(inst_convo::get_by_id)
                .put(inst_convo::replace)
                .patch(inst_convo::update)
                .delete(inst_convo::delete),
        )
}
