//! Repository for the `estatus` table (project status catalogue).

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::estatus::{CreateEstatus, Estatus, UpdateEstatus};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_estatus, tipo";

pub struct EstatusRepo;

impl EstatusRepo {
    pub async fn create(pool: &PgPool, input: &CreateEstatus) -> Result<Estatus, sqlx::Error> {
        let query = format!("INSERT INTO estatus (tipo) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Estatus>(&query)
            .bind(&input.tipo)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Estatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estatus WHERE id_estatus = $1");
        sqlx::query_as::<_, Estatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Estatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estatus ORDER BY id_estatus");
        sqlx::query_as::<_, Estatus>(&query).fetch_all(pool).await
    }

    pub async fn search_by_tipo(pool: &PgPool, tipo: &str) -> Result<Vec<Estatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estatus WHERE tipo ILIKE $1 ORDER BY id_estatus");
        sqlx::query_as::<_, Estatus>(&query)
            .bind(contains_pattern(tipo))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEstatus,
    ) -> Result<Option<Estatus>, UpdateError> {
        let mut query = PartialUpdate::new("estatus");
        query.set("tipo", &input.tipo);
        query.fetch_optional(pool, "id_estatus", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM estatus WHERE id_estatus = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
