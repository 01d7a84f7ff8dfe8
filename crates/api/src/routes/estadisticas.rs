use axum::routing::get;
use axum::Router;

use crate::handlers::estadisticas;
use crate::state::AppState;

/// Routes mounted at `/estadisticas`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/academicos-por-unidad", get(estadisticas::academicos_por_unidad))
        .route("/proyectos-por-profesor", get(estadisticas::proyectos_por_profesor))
}
