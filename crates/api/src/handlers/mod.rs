//! HTTP handlers, one module per resource.
//!
//! Handlers are thin: extract and validate input, call the repository,
//! map a missing row to [`CoreError::NotFound`](idi_core::error::CoreError).

pub mod academico;
pub mod apoyo;
pub mod convocatoria;
pub mod cuestionario;
pub mod estadisticas;
pub mod estatus;
pub mod estudiante;
pub mod fondo;
pub mod foto_academico;
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
