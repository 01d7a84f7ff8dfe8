//! Repository for the `cuestionario` table (questionnaire questions).

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::cuestionario::{CreateCuestionario, Cuestionario, UpdateCuestionario};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_cuestionario, pregunta";

pub struct CuestionarioRepo;

impl CuestionarioRepo {
    pub async fn create(pool: &PgPool, input: &CreateCuestionario) -> Result<Cuestionario, sqlx::Error> {
        let query = format!("INSERT INTO cuestionario (pregunta) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Cuestionario>(&query)
            .bind(&input.pregunta)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cuestionario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cuestionario WHERE id_cuestionario = $1");
        sqlx::query_as::<_, Cuestionario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Cuestionario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cuestionario ORDER BY id_cuestionario");
        sqlx::query_as::<_, Cuestionario>(&query).fetch_all(pool).await
    }

    pub async fn search_by_pregunta(
        pool: &PgPool,
        pregunta: &str,
    ) -> Result<Vec<Cuestionario>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cuestionario WHERE pregunta ILIKE $1 ORDER BY id_cuestionario"
        );
        sqlx::query_as::<_, Cuestionario>(&query)
            .bind(contains_pattern(pregunta))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCuestionario,
    ) -> Result<Option<Cuestionario>, UpdateError> {
        let mut query = PartialUpdate::new("cuestionario");
        query.set_required("pregunta", &input.pregunta);
        query.fetch_optional(pool, "id_cuestionario", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cuestionario WHERE id_cuestionario = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
