//! Repository for the `convocatoria` table (funding calls).

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::convocatoria::{Convocatoria, CreateConvocatoria, UpdateConvocatoria};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_convocatoria, nombre, tipo, institucion";

pub struct ConvocatoriaRepo;

impl ConvocatoriaRepo {
    pub async fn create(pool: &PgPool, input: &CreateConvocatoria) -> Result<Convocatoria, sqlx::Error> {
        let query = format!(
            "INSERT INTO convocatoria (nombre, tipo, institucion)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Convocatoria>(&query)
            .bind(&input.nombre)
            .bind(input.tipo)
            .bind(input.institucion)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Convocatoria>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM convocatoria WHERE id_convocatoria = $1");
        sqlx::query_as::<_, Convocatoria>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Convocatoria>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM convocatoria ORDER BY id_convocatoria");
        sqlx::query_as::<_, Convocatoria>(&query).fetch_all(pool).await
    }

    pub async fn search_by_nombre(pool: &PgPool, nombre: &str) -> Result<Vec<Convocatoria>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM convocatoria WHERE nombre ILIKE $1 ORDER BY id_convocatoria"
        );
        sqlx::query_as::<_, Convocatoria>(&query)
            .bind(contains_pattern(nombre))
            .fetch_all(pool)
            .await
    }

    /// Calls of the given type (`tipo_convo.id`).
    pub async fn list_by_tipo(pool: &PgPool, tipo: DbId) -> Result<Vec<Convocatoria>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM convocatoria WHERE tipo = $1 ORDER BY id_convocatoria"
        );
        sqlx::query_as::<_, Convocatoria>(&query)
            .bind(tipo)
            .fetch_all(pool)
            .await
    }

    /// Calls issued by the given institution (`inst_convo.id`).
    pub async fn list_by_institucion(
        pool: &PgPool,
        institucion: DbId,
    ) -> Result<Vec<Convocatoria>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM convocatoria WHERE institucion = $1 ORDER BY id_convocatoria"
        );
        sqlx::query_as::<_, Convocatoria>(&query)
            .bind(institucion)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateConvocatoria,
    ) -> Result<Option<Convocatoria>, UpdateError> {
        let mut query = PartialUpdate::new("convocatoria");
        query
            .set_required("nombre", &input.nombre)
            .set_required("tipo", &input.tipo)
            .set_required("institucion", &input.institucion);
        query.fetch_optional(pool, "id_convocatoria", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM convocatoria WHERE id_convocatoria = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
