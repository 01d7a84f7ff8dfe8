//! Questionnaire answer sheet model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `cuestionario_respuestas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RespuestaCuestionario {
    pub id: DbId,
    /// References `academico.id_academico`.
    pub nombre_investigador: DbId,
    /// References `unidadacademica.id_unidad`.
    pub escuela: DbId,
    pub respuesta_1: Option<String>,
    pub respuesta_2: Option<String>,
    pub respuesta_3: Option<String>,
    pub respuesta_4: Option<String>,
    pub respuesta_5: Option<String>,
    pub respuesta_6: Option<String>,
    pub respuesta_7: Option<String>,
    pub respuesta_8: Option<String>,
    pub respuesta_9: Option<String>,
    pub fecha_creacion: Timestamp,
}

/// DTO for recording an answer sheet. `fecha_creacion` is set by the database.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRespuestaCuestionario {
    pub nombre_investigador: DbId,
    pub escuela: DbId,
    pub respuesta_1: Option<String>,
    pub respuesta_2: Option<String>,
    pub respuesta_3: Option<String>,
    pub respuesta_4: Option<String>,
    pub respuesta_5: Option<String>,
    pub respuesta_6: Option<String>,
    pub respuesta_7: Option<String>,
    pub respuesta_8: Option<String>,
    pub respuesta_9: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateRespuestaCuestionario {
    pub nombre_investigador: Patch<DbId>,
    pub escuela: Patch<DbId>,
    pub respuesta_1: Patch<String>,
    pub respuesta_2: Patch<String>,
    pub respuesta_3: Patch<String>,
    pub respuesta_4: Patch<String>,
    pub respuesta_5: Patch<String>,
    pub respuesta_6: Patch<String>,
    pub respuesta_7: Patch<String>,
    pub respuesta_8: Patch<String>,
    pub respuesta_9: Patch<String>,
}

impl From<CreateRespuestaCuestionario> for UpdateRespuestaCuestionario {
    fn from(input: CreateRespuestaCuestionario) -> Self {
        Self {
            nombre_investigador: Patch::Value(input.nombre_investigador),
            escuela: Patch::Value(input.escuela),
            respuesta_1: input.respuesta_1.into(),
            respuesta_2: input.respuesta_2.into(),
            respuesta_3: input.respuesta_3.into(),
            respuesta_4: input.respuesta_4.into(),
            respuesta_5: input.respuesta_5.into(),
            respuesta_6: input.respuesta_6.into(),
            respuesta_7: input.respuesta_7.into(),
            respuesta_8: input.respuesta_8.into(),
            respuesta_9: input.respuesta_9.into(),
        }
    }
}
