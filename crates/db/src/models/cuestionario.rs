//! Questionnaire question model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `cuestionario` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cuestionario {
    pub id_cuestionario: DbId,
    pub pregunta: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCuestionario {
    pub pregunta: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateCuestionario {
    pub pregunta: Patch<String>,
}

impl From<CreateCuestionario> for UpdateCuestionario {
    fn from(input: CreateCuestionario) -> Self {
        Self {
            pregunta: Patch::Value(input.pregunta),
        }
    }
}
