//! Repository for the `tematica` table.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::tematica::{CreateTematica, Tematica, UpdateTematica};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_tematica, nombre";

pub struct TematicaRepo;

impl TematicaRepo {
    pub async fn create(pool: &PgPool, input: &CreateTematica) -> Result<Tematica, sqlx::Error> {
        let query = format!("INSERT INTO tematica (nombre) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tematica>(&query)
            .bind(&input.nombre)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tematica>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tematica WHERE id_tematica = $1");
        sqlx::query_as::<_, Tematica>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Tematica>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tematica ORDER BY nombre, id_tematica");
        sqlx::query_as::<_, Tematica>(&query).fetch_all(pool).await
    }

    pub async fn search_by_nombre(pool: &PgPool, nombre: &str) -> Result<Vec<Tematica>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tematica WHERE nombre ILIKE $1 ORDER BY nombre, id_tematica"
        );
        sqlx::query_as::<_, Tematica>(&query)
            .bind(contains_pattern(nombre))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTematica,
    ) -> Result<Option<Tematica>, UpdateError> {
        let mut query = PartialUpdate::new("tematica");
        query.set("nombre", &input.nombre);
        query.fetch_optional(pool, "id_tematica", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tematica WHERE id_tematica = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
