//! Repository for the `apoyo` table.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::apoyo::{Apoyo, CreateApoyo, UpdateApoyo};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_apoyo, tipo, detalle";

/// Provides CRUD and search operations for support records.
pub struct ApoyoRepo;

impl ApoyoRepo {
    pub async fn create(pool: &PgPool, input: &CreateApoyo) -> Result<Apoyo, sqlx::Error> {
        let query = format!("INSERT INTO apoyo (tipo, detalle) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Apoyo>(&query)
            .bind(&input.tipo)
            .bind(&input.detalle)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Apoyo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apoyo WHERE id_apoyo = $1");
        sqlx::query_as::<_, Apoyo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Apoyo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apoyo ORDER BY id_apoyo");
        sqlx::query_as::<_, Apoyo>(&query).fetch_all(pool).await
    }

    pub async fn search_by_tipo(pool: &PgPool, tipo: &str) -> Result<Vec<Apoyo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apoyo WHERE tipo ILIKE $1 ORDER BY id_apoyo");
        sqlx::query_as::<_, Apoyo>(&query)
            .bind(contains_pattern(tipo))
            .fetch_all(pool)
            .await
    }

    pub async fn search_by_detalle(pool: &PgPool, detalle: &str) -> Result<Vec<Apoyo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apoyo WHERE detalle ILIKE $1 ORDER BY id_apoyo");
        sqlx::query_as::<_, Apoyo>(&query)
            .bind(contains_pattern(detalle))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateApoyo,
    ) -> Result<Option<Apoyo>, UpdateError> {
        let mut query = PartialUpdate::new("apoyo");
        query
            .set_required("tipo", &input.tipo)
            .set_required("detalle", &input.detalle);
        query.fetch_optional(pool, "id_apoyo", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM apoyo WHERE id_apoyo = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
