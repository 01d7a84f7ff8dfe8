//! Read-only aggregate queries behind the statistics endpoints.

use sqlx::PgPool;

use crate::models::estadisticas::{AcademicosPorUnidad, ProyectosPorProfesor};

pub struct EstadisticasRepo;

impl EstadisticasRepo {
    /// Researcher headcount per unit. Units without researchers report zero.
    pub async fn academicos_por_unidad(pool: &PgPool) -> Result<Vec<AcademicosPorUnidad>, sqlx::Error> {
        sqlx::query_as::<_, AcademicosPorUnidad>(
            "SELECT u.nombre AS unidad_academica,
                    COUNT(a.id_academico) AS numero_de_profesores
             FROM unidadacademica u
             LEFT JOIN academico a ON a.id_unidad = u.id_unidad
             GROUP BY u.id_unidad, u.nombre
             ORDER BY numero_de_profesores DESC, u.nombre",
        )
        .fetch_all(pool)
        .await
    }

    /// Number of distinct projects per researcher, busiest first.
    pub async fn proyectos_por_profesor(pool: &PgPool) -> Result<Vec<ProyectosPorProfesor>, sqlx::Error> {
        sqlx::query_as::<_, ProyectosPorProfesor>(
            "SELECT a.nombre AS nombre_academico,
                    a.a_paterno AS apellido_academico,
                    u.nombre AS unidad_academica,
                    COUNT(DISTINCT pa.id_proyecto) AS numero_de_proyectos
             FROM academico a
             LEFT JOIN unidadacademica u ON u.id_unidad = a.id_unidad
             LEFT JOIN proyectoacademico pa ON pa.id_academico = a.id_academico
             GROUP BY a.id_academico, a.nombre, a.a_paterno, u.nombre
             ORDER BY numero_de_proyectos DESC, a.a_paterno, a.nombre",
        )
        .fetch_all(pool)
        .await
    }
}
