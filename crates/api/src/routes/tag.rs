//! Route definitions for the `/tags` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tag;
use crate::state::AppState;

/// Routes mounted at `/tags`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> replace
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /search/{tag}           -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tag::list).post(tag::create))
        .route("/search/{tag}", get(tag::search))
        .route(
            "/{id}",
            get(tag::get_by_id)
                .put(tag::replace)
                .patch(tag::update)
                .delete(tag::delete),
        )
}
