//! Repository for the `estudiantes` table and the `proyecto_estudiante` links.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::models::estudiante::{
    CreateEstudiante, Estudiante, EstudianteEnProyecto, UpdateEstudiante,
};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_estudiantes, nombre, a_paterno";

pub struct EstudianteRepo;

impl EstudianteRepo {
    pub async fn create(pool: &PgPool, input: &CreateEstudiante) -> Result<Estudiante, sqlx::Error> {
        let query = format!(
            "INSERT INTO estudiantes (nombre, a_paterno) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Estudiante>(&query)
            .bind(&input.nombre)
            .bind(&input.a_paterno)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Estudiante>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estudiantes WHERE id_estudiantes = $1");
        sqlx::query_as::<_, Estudiante>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Estudiante>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estudiantes ORDER BY id_estudiantes");
        sqlx::query_as::<_, Estudiante>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEstudiante,
    ) -> Result<Option<Estudiante>, UpdateError> {
        let mut query = PartialUpdate::new("estudiantes");
        query
            .set_required("nombre", &input.nombre)
            .set_required("a_paterno", &input.a_paterno);
        query.fetch_optional(pool, "id_estudiantes", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM estudiantes WHERE id_estudiantes = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Students linked to a project, by surname.
    pub async fn list_by_proyecto(
        pool: &PgPool,
        id_proyecto: DbId,
    ) -> Result<Vec<EstudianteEnProyecto>, sqlx::Error> {
        sqlx::query_as::<_, EstudianteEnProyecto>(
            "SELECT e.nombre, e.a_paterno
             FROM proyecto_estudiante pe
             JOIN estudiantes e ON e.id_estudiantes = pe.id_estudiante
             WHERE pe.id_proyecto = $1
             ORDER BY e.a_paterno, e.nombre, e.id_estudiantes",
        )
        .bind(id_proyecto)
        .fetch_all(pool)
        .await
    }

    /// Link a student to a project. Linking twice is a no-op.
    pub async fn link_proyecto(
        pool: &PgPool,
        id_proyecto: DbId,
        id_estudiante: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO proyecto_estudiante (id_proyecto, id_estudiante)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(id_proyecto)
        .bind(id_estudiante)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a student from a project. Returns `true` if a link was removed.
    pub async fn unlink_proyecto(
        pool: &PgPool,
        id_proyecto: DbId,
        id_estudiante: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM proyecto_estudiante WHERE id_proyecto = $1 AND id_estudiante = $2",
        )
        .bind(id_proyecto)
        .bind(id_estudiante)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
