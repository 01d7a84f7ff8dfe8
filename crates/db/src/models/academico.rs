//! Researcher (académico) and researcher photo models and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `academico` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Academico {
    pub id_academico: DbId,
    pub nombre: String,
    pub email: String,
    pub a_materno: String,
    pub a_paterno: String,
    pub id_unidad: Option<DbId>,
}

/// DTO for creating (or fully replacing) a researcher.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAcademico {
    pub nombre: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub a_materno: String,
    pub a_paterno: String,
    pub id_unidad: Option<DbId>,
}

/// DTO for partially updating a researcher. `id_unidad: null` detaches the
/// researcher from their unit.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateAcademico {
    pub nombre: Patch<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Patch<String>,
    pub a_materno: Patch<String>,
    pub a_paterno: Patch<String>,
    pub id_unidad: Patch<DbId>,
}

impl From<CreateAcademico> for UpdateAcademico {
    fn from(input: CreateAcademico) -> Self {
        Self {
            nombre: Patch::Value(input.nombre),
            email: Patch::Value(input.email),
            a_materno: Patch::Value(input.a_materno),
            a_paterno: Patch::Value(input.a_paterno),
            id_unidad: input.id_unidad.into(),
        }
    }
}

/// A row from the `foto_academico` table.
///
/// `foto` carries the image payload as base64 text; `link` points at an
/// externally hosted copy.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FotoAcademico {
    pub id_imagen: DbId,
    pub id_academico: DbId,
    pub foto: Option<String>,
    pub link: Option<String>,
}

/// DTO for attaching a photo to a researcher. The owner comes from the path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateFotoAcademico {
    pub foto: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub link: Option<String>,
}

/// DTO for partially updating a photo.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateFotoAcademico {
    pub foto: Patch<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub link: Patch<String>,
}
