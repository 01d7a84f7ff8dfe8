//! Repository for the `cuestionario_respuestas` table.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::models::respuesta_cuestionario::{
    CreateRespuestaCuestionario, RespuestaCuestionario, UpdateRespuestaCuestionario,
};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id, nombre_investigador, escuela, respuesta_1, respuesta_2, respuesta_3, \
                       respuesta_4, respuesta_5, respuesta_6, respuesta_7, respuesta_8, \
                       respuesta_9, fecha_creacion";

pub struct RespuestaCuestionarioRepo;

impl RespuestaCuestionarioRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateRespuestaCuestionario,
    ) -> Result<RespuestaCuestionario, sqlx::Error> {
        let query = format!(
            "INSERT INTO cuestionario_respuestas
                (nombre_investigador, escuela, respuesta_1, respuesta_2, respuesta_3,
                 respuesta_4, respuesta_5, respuesta_6, respuesta_7, respuesta_8, respuesta_9)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RespuestaCuestionario>(&query)
            .bind(input.nombre_investigador)
            .bind(input.escuela)
            .bind(&input.respuesta_1)
            .bind(&input.respuesta_2)
            .bind(&input.respuesta_3)
            .bind(&input.respuesta_4)
            .bind(&input.respuesta_5)
            .bind(&input.respuesta_6)
            .bind(&input.respuesta_7)
            .bind(&input.respuesta_8)
            .bind(&input.respuesta_9)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RespuestaCuestionario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cuestionario_respuestas WHERE id = $1");
        sqlx::query_as::<_, RespuestaCuestionario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all answer sheets in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<RespuestaCuestionario>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cuestionario_respuestas ORDER BY id"
        );
        sqlx::query_as::<_, RespuestaCuestionario>(&query).fetch_all(pool).await
    }

    pub async fn list_by_investigador(
        pool: &PgPool,
        id_academico: DbId,
    ) -> Result<Vec<RespuestaCuestionario>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cuestionario_respuestas
             WHERE nombre_investigador = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, RespuestaCuestionario>(&query)
            .bind(id_academico)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_escuela(
        pool: &PgPool,
        id_unidad: DbId,
    ) -> Result<Vec<RespuestaCuestionario>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cuestionario_respuestas
             WHERE escuela = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, RespuestaCuestionario>(&query)
            .bind(id_unidad)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRespuestaCuestionario,
    ) -> Result<Option<RespuestaCuestionario>, UpdateError> {
        let mut query = PartialUpdate::new("cuestionario_respuestas");
        query
            .set_required("nombre_investigador", &input.nombre_investigador)
            .set_required("escuela", &input.escuela)
            .set("respuesta_1", &input.respuesta_1)
            .set("respuesta_2", &input.respuesta_2)
            .set("respuesta_3", &input.respuesta_3)
            .set("respuesta_4", &input.respuesta_4)
            .set("respuesta_5", &input.respuesta_5)
            .set("respuesta_6", &input.respuesta_6)
            .set("respuesta_7", &input.respuesta_7)
            .set("respuesta_8", &input.respuesta_8)
            .set("respuesta_9", &input.respuesta_9);
        query.fetch_optional(pool, "id", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cuestionario_respuestas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
