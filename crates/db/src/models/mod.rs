//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (also used for full replacement)
//! - A `Deserialize` update DTO whose fields are [`Patch`](idi_core::patch::Patch)
//!   values, so absent keys and explicit nulls stay distinct

pub mod academico;
pub mod apoyo;
pub mod convocatoria;
pub mod cuestionario;
pub mod estadisticas;
pub mod estatus;
pub mod estudiante;
pub mod fondo;
pub mod inst_convo;
pub mod kth;
pub mod proyecto;
pub mod proyecto_academico;
pub mod respuesta_cuestionario;
pub mod tag;
pub mod tematica;
pub mod tipo_apoyo;
pub mod tipo_convo;
pub mod unidad_academica;
