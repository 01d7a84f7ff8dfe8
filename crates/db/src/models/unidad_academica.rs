//! Academic unit (faculty / school) model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `unidadacademica` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnidadAcademica {
    pub id_unidad: DbId,
    pub nombre: String,
}

/// DTO for creating (or fully replacing) an academic unit.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUnidadAcademica {
    #[validate(length(min = 3, max = 100))]
    pub nombre: String,
}

/// DTO for partially updating an academic unit.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUnidadAcademica {
    #[validate(length(min = 3, max = 100))]
    pub nombre: Patch<String>,
}

impl From<CreateUnidadAcademica> for UpdateUnidadAcademica {
    fn from(input: CreateUnidadAcademica) -> Self {
        Self {
            nombre: Patch::Value(input.nombre),
        }
    }
}
