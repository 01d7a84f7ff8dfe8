//! Partial `UPDATE` statement builder.
//!
//! Collects `column = $n` assignments for the fields present in an update
//! DTO, in the order they are added, then appends the key predicate (bound
//! last) and a `RETURNING` clause. Column and table names always come from
//! code, never from request input.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{Encode, FromRow, PgPool, Postgres, QueryBuilder, Type};

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("No fields to update")]
    NoFields,

    #[error("Field '{0}' cannot be null")]
    NullNotAllowed(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct PartialUpdate<'args> {
    builder: QueryBuilder<'args, Postgres>,
    columns: Vec<&'static str>,
    rejected: Option<&'static str>,
}

impl<'args> PartialUpdate<'args> {
    pub fn new(table: &'static str) -> Self {
        Self {
            builder: QueryBuilder::new(format!("UPDATE {table} SET ")),
            columns: Vec::new(),
            rejected: None,
        }
    }

    /// Add an assignment for a nullable column.
    pub fn set<T>(&mut self, column: &'static str, patch: &Patch<T>) -> &mut Self
    where
        T: Clone + Encode<'args, Postgres> + Type<Postgres> + Send + 'args,
    {
        match patch {
            Patch::Absent => {}
            Patch::Null => self.assign(column, None::<T>),
            Patch::Value(v) => self.assign(column, Some(v.clone())),
        }
        self
    }

    /// Add an assignment for a NOT NULL column. An explicit null is recorded
    /// and reported when the statement is executed.
    pub fn set_required<T>(&mut self, column: &'static str, patch: &Patch<T>) -> &mut Self
    where
        T: Clone + Encode<'args, Postgres> + Type<Postgres> + Send + 'args,
    {
        match patch {
            Patch::Absent => {}
            Patch::Null => {
                self.rejected.get_or_insert(column);
            }
            Patch::Value(v) => self.assign(column, v.clone()),
        }
        self
    }

    fn assign<T>(&mut self, column: &'static str, value: T)
    where
        T: Encode<'args, Postgres> + Type<Postgres> + Send + 'args,
    {
        if !self.columns.is_empty() {
            self.builder.push(", ");
        }
        self.builder.push(column).push(" = ").push_bind(value);
        self.columns.push(column);
    }

    /// Columns that will be written, in assignment order.
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    /// The SQL accumulated so far.
    pub fn sql(&self) -> &str {
        self.builder.sql()
    }

    /// Finish the statement and run it, returning the updated row or `None`
    /// when no row has `key_column = id`.
    pub async fn fetch_optional<O>(
        mut self,
        pool: &PgPool,
        key_column: &'static str,
        id: DbId,
        returning: &str,
    ) -> Result<Option<O>, UpdateError>
    where
        O: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        if let Some(column) = self.rejected {
            return Err(UpdateError::NullNotAllowed(column));
        }
        if self.columns.is_empty() {
            return Err(UpdateError::NoFields);
        }

        self.builder
            .push(" WHERE ")
            .push(key_column)
            .push(" = ")
            .push_bind(id)
            .push(" RETURNING ")
            .push(returning);

        tracing::debug!(sql = self.builder.sql(), "Executing partial update");

        let row = self
            .builder
            .build_query_as::<O>()
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
