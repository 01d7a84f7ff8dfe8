//! Funding call (convocatoria) model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `convocatoria` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Convocatoria {
    pub id_convocatoria: DbId,
    pub nombre: String,
    /// References `tipo_convo.id`.
    pub tipo: DbId,
    /// References `inst_convo.id`.
    pub institucion: DbId,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateConvocatoria {
    pub nombre: String,
    pub tipo: DbId,
    pub institucion: DbId,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateConvocatoria {
    pub nombre: Patch<String>,
    pub tipo: Patch<DbId>,
    pub institucion: Patch<DbId>,
}

impl From<CreateConvocatoria> for UpdateConvocatoria {
    fn from(input: CreateConvocatoria) -> Self {
        Self {
            nombre: Patch::Value(input.nombre),
            tipo: Patch::Value(input.tipo),
            institucion: Patch::Value(input.institucion),
        }
    }
}
