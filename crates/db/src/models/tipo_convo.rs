//! Funding-call type catalogue model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tipo_convo` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TipoConvo {
    pub id: DbId,
    pub nombre: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTipoConvo {
    pub nombre: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateTipoConvo {
    pub nombre: Patch<String>,
}

impl From<CreateTipoConvo> for UpdateTipoConvo {
    fn from(input: CreateTipoConvo) -> Self {
        Self {
            nombre: input.nombre.into(),
        }
    }
}
