//! Repository for the `unidadacademica` table.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::unidad_academica::{
    CreateUnidadAcademica, UnidadAcademica, UpdateUnidadAcademica,
};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_unidad, nombre";

/// Provides CRUD operations for academic units.
pub struct UnidadAcademicaRepo;

impl UnidadAcademicaRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateUnidadAcademica,
    ) -> Result<UnidadAcademica, sqlx::Error> {
        let query = format!("INSERT INTO unidadacademica (nombre) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, UnidadAcademica>(&query)
            .bind(&input.nombre)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UnidadAcademica>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM unidadacademica WHERE id_unidad = $1");
        sqlx::query_as::<_, UnidadAcademica>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<UnidadAcademica>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM unidadacademica ORDER BY id_unidad");
        sqlx::query_as::<_, UnidadAcademica>(&query).fetch_all(pool).await
    }

    pub async fn search_by_nombre(
        pool: &PgPool,
        nombre: &str,
    ) -> Result<Vec<UnidadAcademica>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM unidadacademica WHERE nombre ILIKE $1 ORDER BY id_unidad"
        );
        sqlx::query_as::<_, UnidadAcademica>(&query)
            .bind(contains_pattern(nombre))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUnidadAcademica,
    ) -> Result<Option<UnidadAcademica>, UpdateError> {
        let mut query = PartialUpdate::new("unidadacademica");
        query.set_required("nombre", &input.nombre);
        query.fetch_optional(pool, "id_unidad", id, COLUMNS).await
    }

    /// Delete a unit. Researchers and projects pointing at it are detached.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM unidadacademica WHERE id_unidad = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
