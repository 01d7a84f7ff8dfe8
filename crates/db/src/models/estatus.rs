//! Project status catalogue model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `estatus` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Estatus {
    pub id_estatus: DbId,
    pub tipo: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEstatus {
    #[validate(length(max = 20))]
    pub tipo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateEstatus {
    #[validate(length(max = 20))]
    pub tipo: Patch<String>,
}

impl From<CreateEstatus> for UpdateEstatus {
    fn from(input: CreateEstatus) -> Self {
        Self {
            tipo: input.tipo.into(),
        }
    }
}
