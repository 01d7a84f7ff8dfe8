//! Project ↔ researcher assignment model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `proyectoacademico` join table. `jefe = 1` marks the
/// project lead.
#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct ProyectoAcademico {
    pub id: DbId,
    pub id_proyecto: Option<DbId>,
    pub id_academico: Option<DbId>,
    pub jefe: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProyectoAcademico {
    pub id_proyecto: Option<DbId>,
    pub id_academico: Option<DbId>,
    pub jefe: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProyectoAcademico {
    pub id_proyecto: Patch<DbId>,
    pub id_academico: Patch<DbId>,
    pub jefe: Patch<i32>,
}

impl From<CreateProyectoAcademico> for UpdateProyectoAcademico {
    fn from(input: CreateProyectoAcademico) -> Self {
        Self {
            id_proyecto: input.id_proyecto.into(),
            id_academico: input.id_academico.into(),
            jefe: input.jefe.into(),
        }
    }
}
