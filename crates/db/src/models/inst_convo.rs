//! Funding institution catalogue model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `inst_convo` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InstConvo {
    pub id: DbId,
    pub nombre: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInstConvo {
    pub nombre: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateInstConvo {
    pub nombre: Patch<String>,
}

impl From<CreateInstConvo> for UpdateInstConvo {
    fn from(input: CreateInstConvo) -> Self {
        Self {
            nombre: input.nombre.into(),
        }
    }
}
