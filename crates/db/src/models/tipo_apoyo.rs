//! Support type catalogue model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tipo_apoyo` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TipoApoyo {
    pub id_tipo_apoyo: DbId,
    pub tipo: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTipoApoyo {
    #[validate(length(min = 1, max = 15))]
    pub tipo: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateTipoApoyo {
    #[validate(length(min = 1, max = 15))]
    pub tipo: Patch<String>,
}

impl From<CreateTipoApoyo> for UpdateTipoApoyo {
    fn from(input: CreateTipoApoyo) -> Self {
        Self {
            tipo: Patch::Value(input.tipo),
        }
    }
}
