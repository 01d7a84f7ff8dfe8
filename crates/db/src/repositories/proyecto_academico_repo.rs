//! Repository for the `proyectoacademico` join table.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::models::proyecto_academico::{
    CreateProyectoAcademico, ProyectoAcademico, UpdateProyectoAcademico,
};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id, id_proyecto, id_academico, jefe";

/// Provides CRUD operations for project/researcher assignments.
pub struct ProyectoAcademicoRepo;

impl ProyectoAcademicoRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProyectoAcademico,
    ) -> Result<ProyectoAcademico, sqlx::Error> {
        let query = format!(
            "INSERT INTO proyectoacademico (id_proyecto, id_academico, jefe)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProyectoAcademico>(&query)
            .bind(input.id_proyecto)
            .bind(input.id_academico)
            .bind(input.jefe)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProyectoAcademico>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectoacademico WHERE id = $1");
        sqlx::query_as::<_, ProyectoAcademico>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ProyectoAcademico>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectoacademico ORDER BY id");
        sqlx::query_as::<_, ProyectoAcademico>(&query).fetch_all(pool).await
    }

    pub async fn list_by_proyecto(
        pool: &PgPool,
        id_proyecto: DbId,
    ) -> Result<Vec<ProyectoAcademico>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectoacademico WHERE id_proyecto = $1 ORDER BY id");
        sqlx::query_as::<_, ProyectoAcademico>(&query)
            .bind(id_proyecto)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_academico(
        pool: &PgPool,
        id_academico: DbId,
    ) -> Result<Vec<ProyectoAcademico>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectoacademico WHERE id_academico = $1 ORDER BY id");
        sqlx::query_as::<_, ProyectoAcademico>(&query)
            .bind(id_academico)
            .fetch_all(pool)
            .await
    }

    /// Assignments flagged as project lead (`jefe = 1`).
    pub async fn list_jefes(pool: &PgPool) -> Result<Vec<ProyectoAcademico>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectoacademico WHERE jefe = 1 ORDER BY id_proyecto, id");
        sqlx::query_as::<_, ProyectoAcademico>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProyectoAcademico,
    ) -> Result<Option<ProyectoAcademico>, UpdateError> {
        let mut query = PartialUpdate::new("proyectoacademico");
        query
            .set("id_proyecto", &input.id_proyecto)
            .set("id_academico", &input.id_academico)
            .set("jefe", &input.jefe);
        query.fetch_optional(pool, "id", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proyectoacademico WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every assignment of a project. Returns the number of rows removed.
    pub async fn delete_by_proyecto(pool: &PgPool, id_proyecto: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proyectoacademico WHERE id_proyecto = $1")
            .bind(id_proyecto)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Remove every assignment of a researcher. Returns the number of rows removed.
    pub async fn delete_by_academico(pool: &PgPool, id_academico: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proyectoacademico WHERE id_academico = $1")
            .bind(id_academico)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
