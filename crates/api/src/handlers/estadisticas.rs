//! Handlers for the read-only `/estadisticas` reports.

use axum::extract::State;
use axum::Json;
use idi_db::models::estadisticas::{AcademicosPorUnidad, ProyectosPorProfesor};
use idi_db::repositories::EstadisticasRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /estadisticas/academicos-por-unidad
pub async fn academicos_por_unidad(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AcademicosPorUnidad>>> {
    let rows = EstadisticasRepo::academicos_por_unidad(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /estadisticas/proyectos-por-profesor
pub async fn proyectos_por_profesor(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProyectosPorProfesor>>> {
    let rows = EstadisticasRepo::proyectos_por_profesor(&state.pool).await?;
    Ok(Json(rows))
}
