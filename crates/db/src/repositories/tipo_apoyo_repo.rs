//! Repository for the `tipo_apoyo` table.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::tipo_apoyo::{CreateTipoApoyo, TipoApoyo, UpdateTipoApoyo};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_tipo_apoyo, tipo";

pub struct TipoApoyoRepo;

impl TipoApoyoRepo {
    pub async fn create(pool: &PgPool, input: &CreateTipoApoyo) -> Result<TipoApoyo, sqlx::Error> {
        let query = format!("INSERT INTO tipo_apoyo (tipo) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, TipoApoyo>(&query)
            .bind(&input.tipo)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TipoApoyo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tipo_apoyo WHERE id_tipo_apoyo = $1");
        sqlx::query_as::<_, TipoApoyo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<TipoApoyo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tipo_apoyo ORDER BY id_tipo_apoyo");
        sqlx::query_as::<_, TipoApoyo>(&query).fetch_all(pool).await
    }

    pub async fn search_by_tipo(pool: &PgPool, tipo: &str) -> Result<Vec<TipoApoyo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tipo_apoyo WHERE tipo ILIKE $1 ORDER BY id_tipo_apoyo"
        );
        sqlx::query_as::<_, TipoApoyo>(&query)
            .bind(contains_pattern(tipo))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTipoApoyo,
    ) -> Result<Option<TipoApoyo>, UpdateError> {
        let mut query = PartialUpdate::new("tipo_apoyo");
        query.set_required("tipo", &input.tipo);
        query.fetch_optional(pool, "id_tipo_apoyo", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tipo_apoyo WHERE id_tipo_apoyo = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
