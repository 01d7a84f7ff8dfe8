//! Repository for the `detalles_apoyo` table, exposed as support tags.

use idi_core::types::DbId;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::tag::{CreateTag, Tag, UpdateTag};
use crate::update::{PartialUpdate, UpdateError};

const COLUMNS: &str = "id_apoyo, tag";

pub struct TagRepo;

impl TagRepo {
    pub async fn create(pool: &PgPool, input: &CreateTag) -> Result<Tag, sqlx::Error> {
        let query = format!("INSERT INTO detalles_apoyo (tag) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(&input.tag)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM detalles_apoyo WHERE id_apoyo = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM detalles_apoyo ORDER BY id_apoyo");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    pub async fn search(pool: &PgPool, tag: &str) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM detalles_apoyo WHERE tag ILIKE $1 ORDER BY id_apoyo");
        sqlx::query_as::<_, Tag>(&query)
            .bind(contains_pattern(tag))
            .fetch_all(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateTag) -> Result<Option<Tag>, UpdateError> {
        let mut query = PartialUpdate::new("detalles_apoyo");
        query.set_required("tag", &input.tag);
        query.fetch_optional(pool, "id_apoyo", id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM detalles_apoyo WHERE id_apoyo = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
