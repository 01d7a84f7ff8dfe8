//! Support record (apoyo) model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `apoyo` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Apoyo {
    pub id_apoyo: DbId,
    pub tipo: String,
    pub detalle: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApoyo {
    pub tipo: String,
    pub detalle: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateApoyo {
    pub tipo: Patch<String>,
    pub detalle: Patch<String>,
}

impl From<CreateApoyo> for UpdateApoyo {
    fn from(input: CreateApoyo) -> Self {
        Self {
            tipo: Patch::Value(input.tipo),
            detalle: Patch::Value(input.detalle),
        }
    }
}
