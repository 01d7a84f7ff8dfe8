//! Repository for the `kth` table (readiness assessments).

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::models::kth::{CreateKth, Kth, UpdateKth};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_kth, id_proyecto, trl, crl, team, brl, iprl, frl, fecha_creacion";

pub struct KthRepo;

impl KthRepo {
    /// Insert an assessment. `fecha_creacion` falls back to the current time.
    pub async fn create(pool: &PgPool, input: &CreateKth) -> Result<Kth, sqlx::Error> {
        let query = format!(
            "INSERT INTO kth (id_proyecto, trl, crl, team, brl, iprl, frl, fecha_creacion)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kth>(&query)
            .bind(input.id_proyecto)
            .bind(input.trl)
            .bind(input.crl)
            .bind(input.team)
            .bind(input.brl)
            .bind(input.iprl)
            .bind(input.frl)
            .bind(input.fecha_creacion)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Kth>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kth WHERE id_kth = $1");
        sqlx::query_as::<_, Kth>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Kth>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kth ORDER BY id_kth");
        sqlx::query_as::<_, Kth>(&query).fetch_all(pool).await
    }

    /// The most recent assessment recorded for a project.
    pub async fn find_by_proyecto(pool: &PgPool, id_proyecto: DbId) -> Result<Option<Kth>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM kth WHERE id_proyecto = $1
             ORDER BY fecha_creacion DESC NULLS LAST, id_kth DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Kth>(&query)
            .bind(id_proyecto)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateKth) -> Result<Option<Kth>, UpdateError> {
        let mut query = PartialUpdate::new("kth");
        query
            .set_required("id_proyecto", &input.id_proyecto)
            .set("trl", &input.trl)
            .set("crl", &input.crl)
            .set("team", &input.team)
            .set("brl", &input.brl)
            .set("iprl", &input.iprl)
            .set("frl", &input.frl)
            .set("fecha_creacion", &input.fecha_creacion);
        query.fetch_optional(pool, "id_kth", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM kth WHERE id_kth = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every assessment of a project. Returns the number of rows removed.
    pub async fn delete_by_proyecto(pool: &PgPool, id_proyecto: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM kth WHERE id_proyecto = $1")
            .bind(id_proyecto)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
