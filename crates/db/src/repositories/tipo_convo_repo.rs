//! Repository for the `tipo_convo` table (funding call types).

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::tipo_convo::{CreateTipoConvo, TipoConvo, UpdateTipoConvo};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id, nombre";

pub struct TipoConvoRepo;

impl TipoConvoRepo {
    pub async fn create(pool: &PgPool, input: &CreateTipoConvo) -> Result<TipoConvo, sqlx::Error> {
        let query = format!("INSERT INTO tipo_convo (nombre) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, TipoConvo>(&query)
            .bind(&input.nombre)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TipoConvo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tipo_convo WHERE id = $1");
        sqlx::query_as::<_, TipoConvo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<TipoConvo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tipo_convo ORDER BY nombre, id");
        sqlx::query_as::<_, TipoConvo>(&query).fetch_all(pool).await
    }

    pub async fn search_by_nombre(pool: &PgPool, nombre: &str) -> Result<Vec<TipoConvo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tipo_convo WHERE nombre ILIKE $1 ORDER BY nombre, id");
        sqlx::query_as::<_, TipoConvo>(&query)
            .bind(contains_pattern(nombre))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTipoConvo,
    ) -> Result<Option<TipoConvo>, UpdateError> {
        let mut query = PartialUpdate::new("tipo_convo");
        query.set("nombre", &input.nombre);
        query.fetch_optional(pool, "id", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tipo_convo WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
