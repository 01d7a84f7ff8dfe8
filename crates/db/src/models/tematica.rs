//! Research theme (temática) model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tematica` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tematica {
    pub id_tematica: DbId,
    pub nombre: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTematica {
    pub nombre: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateTematica {
    pub nombre: Patch<String>,
}

impl From<CreateTematica> for UpdateTematica {
    fn from(input: CreateTematica) -> Self {
        Self {
            nombre: input.nombre.into(),
        }
    }
}
