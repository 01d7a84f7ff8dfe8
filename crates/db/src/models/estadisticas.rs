//! Read-only aggregate rows for the statistics endpoints.
//!
//! Field names serialize in PascalCase to match the published report format.

use serde::Serialize;
use sqlx::FromRow;

/// Number of researchers per academic unit.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcademicosPorUnidad {
    pub unidad_academica: String,
    pub numero_de_profesores: i64,
}

/// Number of projects each researcher participates in.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProyectosPorProfesor {
    pub nombre_academico: String,
    pub apellido_academico: String,
    pub unidad_academica: Option<String>,
    pub numero_de_proyectos: i64,
}
