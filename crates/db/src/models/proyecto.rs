//! Research project model, DTOs and denormalized read views.

use idi_core::patch::Patch;
use idi_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::proyecto_academico::ProyectoAcademico;

/// A row from the `proyecto` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Proyecto {
    pub id_proyecto: DbId,
    pub nombre: String,
    pub monto: Option<i64>,
    pub fecha_postulacion: Option<Date>,
    pub comentarios: Option<String>,
    pub unidad: Option<DbId>,
    pub id_tematica: Option<DbId>,
    pub id_estatus: Option<DbId>,
    pub id_kth: Option<DbId>,
    pub convocatoria: Option<String>,
    pub tipo_convocatoria: Option<DbId>,
    pub inst_conv: Option<DbId>,
    pub detalle_apoyo: Option<String>,
    pub apoyo: Option<DbId>,
}

/// DTO for creating (or fully replacing) a project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProyecto {
    #[validate(length(min = 1))]
    pub nombre: String,
    pub monto: Option<i64>,
    pub fecha_postulacion: Option<Date>,
    pub comentarios: Option<String>,
    pub unidad: Option<DbId>,
    pub id_tematica: Option<DbId>,
    pub id_estatus: Option<DbId>,
    pub id_kth: Option<DbId>,
    pub convocatoria: Option<String>,
    pub tipo_convocatoria: Option<DbId>,
    pub inst_conv: Option<DbId>,
    pub detalle_apoyo: Option<String>,
    pub apoyo: Option<DbId>,
}

/// DTO for partially updating a project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProyecto {
    #[validate(length(min = 1))]
    pub nombre: Patch<String>,
    pub monto: Patch<i64>,
    pub fecha_postulacion: Patch<Date>,
    pub comentarios: Patch<String>,
    pub unidad: Patch<DbId>,
    pub id_tematica: Patch<DbId>,
    pub id_estatus: Patch<DbId>,
    pub id_kth: Patch<DbId>,
    pub convocatoria: Patch<String>,
    pub tipo_convocatoria: Patch<DbId>,
    pub inst_conv: Patch<DbId>,
    pub detalle_apoyo: Patch<String>,
    pub apoyo: Patch<DbId>,
}

impl From<CreateProyecto> for UpdateProyecto {
    fn from(input: CreateProyecto) -> Self {
        Self {
            nombre: Patch::Value(input.nombre),
            monto: input.monto.into(),
            fecha_postulacion: input.fecha_postulacion.into(),
            comentarios: input.comentarios.into(),
            unidad: input.unidad.into(),
            id_tematica: input.id_tematica.into(),
            id_estatus: input.id_estatus.into(),
            id_kth: input.id_kth.into(),
            convocatoria: input.convocatoria.into(),
            tipo_convocatoria: input.tipo_convocatoria.into(),
            inst_conv: input.inst_conv.into(),
            detalle_apoyo: input.detalle_apoyo.into(),
            apoyo: input.apoyo.into(),
        }
    }
}

/// Project with catalogue names resolved in place of foreign keys.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProyectoDetalle {
    pub id_proyecto: DbId,
    pub nombre: String,
    pub monto: Option<i64>,
    pub fecha_postulacion: Option<Date>,
    pub comentarios: Option<String>,
    pub tematica: Option<String>,
    pub estatus: Option<String>,
    pub convocatoria: Option<String>,
    pub nombre_convo: Option<String>,
    pub institucion: Option<String>,
    pub detalle_apoyo: Option<String>,
    pub apoyo: Option<String>,
    pub unidad: Option<String>,
}

/// One researcher inside an aggregated project view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AcademicoAsignado {
    pub id_academico: DbId,
    pub nombre: String,
    pub a_paterno: String,
    pub jefe: Option<i32>,
}

/// A project together with every researcher assigned to it.
///
/// `academicos` is an empty array when the project has no assignments.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AcademicosPorProyecto {
    pub id_proyecto: DbId,
    pub nombre_proyecto: String,
    pub academicos: Json<Vec<AcademicoAsignado>>,
}

/// A researcher assignment supplied when creating a project in one step.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AsignacionAcademico {
    /// The researcher's `id_academico`.
    pub id: DbId,
    pub jefe: i32,
}

/// DTO for creating a project together with its researcher assignments.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProyectoConAcademicos {
    #[serde(flatten)]
    #[validate(nested)]
    pub proyecto: CreateProyecto,
    #[serde(default)]
    pub academicos: Vec<AsignacionAcademico>,
}

/// A project created together with its assignments, as returned by the
/// single-statement insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProyectoConAcademicos {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub proyecto: Proyecto,
    pub asignaciones: Json<Vec<ProyectoAcademico>>,
}
