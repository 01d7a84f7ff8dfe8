//! Repository for the `inst_convo` table (funding call institutions).

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::inst_convo::{CreateInstConvo, InstConvo, UpdateInstConvo};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id, nombre";

pub struct InstConvoRepo;

impl InstConvoRepo {
    pub async fn create(pool: &PgPool, input: &CreateInstConvo) -> Result<InstConvo, sqlx::Error> {
        let query = format!("INSERT INTO inst_convo (nombre) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, InstConvo>(&query)
            .bind(&input.nombre)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InstConvo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inst_convo WHERE id = $1");
        sqlx::query_as::<_, InstConvo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<InstConvo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inst_convo ORDER BY nombre, id");
        sqlx::query_as::<_, InstConvo>(&query).fetch_all(pool).await
    }

    pub async fn search_by_nombre(pool: &PgPool, nombre: &str) -> Result<Vec<InstConvo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inst_convo WHERE nombre ILIKE $1 ORDER BY nombre, id");
        sqlx::query_as::<_, InstConvo>(&query)
            .bind(contains_pattern(nombre))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInstConvo,
    ) -> Result<Option<InstConvo>, UpdateError> {
        let mut query = PartialUpdate::new("inst_convo");
        query.set("nombre", &input.nombre);
        query.fetch_optional(pool, "id", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inst_convo WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
