//! Route definitions for the `/kth` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::kth;
use crate::state::AppState;

/// Routes mounted at `/kth`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /project/{id_proyecto}         -> get_by_proyecto
/// DELETE /project/{id_proyecto}         -> delete_by_proyecto
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> replace
/// PATCH  /{id}                          -> update
/// DELETE /{id}                          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(kth::list).post(kth::create))
        .route(
            "/project/{id_proyecto}",
            get(kth::get_by_proyecto).delete(kth::delete_by_proyecto),
        )
        .route(
            "/{id}",
            get(kth::get_by_id)
                .put(kth::replace)
                .patch(kth::update)
                .delete(kth::delete),
        )
}
