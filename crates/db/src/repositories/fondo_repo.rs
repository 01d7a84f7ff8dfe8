//! Repository for the `fondos` table.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::fondo::{CreateFondo, Fondo, UpdateFondo};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id, nombre, inicio, cierre, financiamiento, plazo, objetivo, \
                       trl, crl, team, brl, iprl, frl, tipo, req";

/// Provides CRUD operations for funding sources.
pub struct FondoRepo;

impl FondoRepo {
    pub async fn create(pool: &PgPool, input: &CreateFondo) -> Result<Fondo, sqlx::Error> {
        let query = format!(
            "INSERT INTO fondos
                (nombre, inicio, cierre, financiamiento, plazo, objetivo,
                 trl, crl, team, brl, iprl, frl, tipo, req)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fondo>(&query)
            .bind(&input.nombre)
            .bind(input.inicio)
            .bind(input.cierre)
            .bind(&input.financiamiento)
            .bind(&input.plazo)
            .bind(&input.objetivo)
            .bind(input.trl)
            .bind(input.crl)
            .bind(input.team)
            .bind(input.brl)
            .bind(input.iprl)
            .bind(input.frl)
            .bind(input.tipo)
            .bind(&input.req)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Fondo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fondos WHERE id = $1");
        sqlx::query_as::<_, Fondo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Fondo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fondos ORDER BY nombre, id");
        sqlx::query_as::<_, Fondo>(&query).fetch_all(pool).await
    }

    pub async fn search_by_nombre(pool: &PgPool, nombre: &str) -> Result<Vec<Fondo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fondos WHERE nombre ILIKE $1 ORDER BY nombre, id");
        sqlx::query_as::<_, Fondo>(&query)
            .bind(contains_pattern(nombre))
            .fetch_all(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateFondo) -> Result<Option<Fondo>, UpdateError> {
        let mut query = PartialUpdate::new("fondos");
        query
            .set("nombre", &input.nombre)
            .set("inicio", &input.inicio)
            .set("cierre", &input.cierre)
            .set("financiamiento", &input.financiamiento)
            .set("plazo", &input.plazo)
            .set("objetivo", &input.objetivo)
            .set("trl", &input.trl)
            .set("crl", &input.crl)
            .set("team", &input.team)
            .set("brl", &input.brl)
            .set("iprl", &input.iprl)
            .set("frl", &input.frl)
            .set("tipo", &input.tipo)
            .set("req", &input.req);
        query.fetch_optional(pool, "id", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fondos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
