//! Repository for the `foto_academico` table.
//!
//! Photos are always addressed through their owning researcher, so the
//! single-row lookups take both ids.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::models::academico::{CreateFotoAcademico, FotoAcademico, UpdateFotoAcademico};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_imagen, id_academico, foto, link";

pub struct FotoAcademicoRepo;

impl FotoAcademicoRepo {
    pub async fn create(
        pool: &PgPool,
        id_academico: DbId,
        input: &CreateFotoAcademico,
    ) -> Result<FotoAcademico, sqlx::Error> {
        let query = format!(
            "INSERT INTO foto_academico (id_academico, foto, link)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FotoAcademico>(&query)
            .bind(id_academico)
            .bind(&input.foto)
            .bind(&input.link)
            .fetch_one(pool)
            .await
    }

    /// Every photo in the system, grouped by researcher.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<FotoAcademico>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM foto_academico ORDER BY id_academico, id_imagen");
        sqlx::query_as::<_, FotoAcademico>(&query).fetch_all(pool).await
    }

    pub async fn list_by_academico(
        pool: &PgPool,
        id_academico: DbId,
    ) -> Result<Vec<FotoAcademico>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM foto_academico WHERE id_academico = $1 ORDER BY id_imagen"
        );
        sqlx::query_as::<_, FotoAcademico>(&query)
            .bind(id_academico)
            .fetch_all(pool)
            .await
    }

    /// Find a photo, but only if it belongs to `id_academico`.
    pub async fn find_for_academico(
        pool: &PgPool,
        id_academico: DbId,
        id_imagen: DbId,
    ) -> Result<Option<FotoAcademico>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM foto_academico WHERE id_imagen = $1 AND id_academico = $2"
        );
        sqlx::query_as::<_, FotoAcademico>(&query)
            .bind(id_imagen)
            .bind(id_academico)
            .fetch_optional(pool)
            .await
    }

    /// Apply the fields present in `input` to a photo. Ownership is checked
    /// by the caller.
    pub async fn update(
        pool: &PgPool,
        id_imagen: DbId,
        input: &UpdateFotoAcademico,
    ) -> Result<Option<FotoAcademico>, UpdateError> {
        let mut query = PartialUpdate::new("foto_academico");
        query.set("foto", &input.foto).set("link", &input.link);
        query.fetch_optional(pool, "id_imagen", id_imagen, COLUMNS).await
    }

    /// Delete a photo owned by `id_academico`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id_academico: DbId, id_imagen: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM foto_academico WHERE id_imagen = $1 AND id_academico = $2")
                .bind(id_imagen)
                .bind(id_academico)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
