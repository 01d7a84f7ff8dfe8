//! Repository for the `academico` table.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::academico::{Academico, CreateAcademico, UpdateAcademico};
use crate::update::{PartialUpdate, UpdateError};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id_academico, nombre, email, a_materno, a_paterno, id_unidad";

/// Provides CRUD and search operations for researchers.
pub struct AcademicoRepo;

impl AcademicoRepo {
    /// Insert a new researcher, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAcademico) -> Result<Academico, sqlx::Error> {
        let query = format!(
            "INSERT INTO academico (nombre, email, a_materno, a_paterno, id_unidad)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Academico>(&query)
            .bind(&input.nombre)
            .bind(&input.email)
            .bind(&input.a_materno)
            .bind(&input.a_paterno)
            .bind(input.id_unidad)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Academico>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM academico WHERE id_academico = $1");
        sqlx::query_as::<_, Academico>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all researchers ordered by first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Academico>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM academico ORDER BY nombre, id_academico");
        sqlx::query_as::<_, Academico>(&query).fetch_all(pool).await
    }

    /// Researchers whose first name or either surname contains `term`,
    /// case-insensitively.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Academico>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM academico
             WHERE nombre ILIKE $1 OR a_paterno ILIKE $1 OR a_materno ILIKE $1
             ORDER BY a_paterno, nombre, id_academico"
        );
        sqlx::query_as::<_, Academico>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Apply the fields present in `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAcademico,
    ) -> Result<Option<Academico>, UpdateError> {
        let mut query = PartialUpdate::new("academico");
        query
            .set_required("nombre", &input.nombre)
            .set_required("email", &input.email)
            .set_required("a_materno", &input.a_materno)
            .set_required("a_paterno", &input.a_paterno)
            .set("id_unidad", &input.id_unidad);
        query.fetch_optional(pool, "id_academico", id, COLUMNS).await
    }

    /// Delete a researcher by ID. Photos, assignments and questionnaire
    /// answers go with it. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM academico WHERE id_academico = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
