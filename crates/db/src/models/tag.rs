//! Support detail tags (`detalles_apoyo`) model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `detalles_apoyo` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id_apoyo: DbId,
    pub tag: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTag {
    #[validate(length(min = 1, max = 100))]
    pub tag: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateTag {
    #[validate(length(min = 1, max = 100))]
    pub tag: Patch<String>,
}

impl From<CreateTag> for UpdateTag {
    fn from(input: CreateTag) -> Self {
        Self {
            tag: Patch::Value(input.tag),
        }
    }
}
