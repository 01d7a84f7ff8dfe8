//! Student model, DTOs and the project roster view.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `estudiantes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Estudiante {
    pub id_estudiantes: DbId,
    pub nombre: String,
    pub a_paterno: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEstudiante {
    #[validate(length(min = 1, max = 50))]
    pub nombre: String,
    #[validate(length(min = 1, max = 50))]
    pub a_paterno: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateEstudiante {
    #[validate(length(min = 1, max = 50))]
    pub nombre: Patch<String>,
    #[validate(length(min = 1, max = 50))]
    pub a_paterno: Patch<String>,
}

impl From<CreateEstudiante> for UpdateEstudiante {
    fn from(input: CreateEstudiante) -> Self {
        Self {
            nombre: Patch::Value(input.nombre),
            a_paterno: Patch::Value(input.a_paterno),
        }
    }
}

/// Name and first surname of a student on a project roster.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EstudianteEnProyecto {
    pub nombre: String,
    pub a_paterno: String,
}
