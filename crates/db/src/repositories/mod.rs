//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Partial updates go through
//! [`PartialUpdate`](crate::update::PartialUpdate) and report
//! [`UpdateError`](crate::update::UpdateError).

pub mod academico_repo;
pub mod apoyo_repo;
pub mod convocatoria_repo;
pub mod cuestionario_repo;
pub mod estadisticas_repo;
pub mod estatus_repo;
pub mod estudiante_repo;
pub mod foto_academico_repo;
pub mod fondo_repo;
pub mod inst_convo_repo;
pub mod kth_repo;
pub mod proyecto_academico_repo;
pub mod proyecto_repo;
pub mod respuesta_cuestionario_repo;
pub mod tag_repo;
pub mod tematica_repo;
pub mod tipo_apoyo_repo;
pub mod tipo_convo_repo;
pub mod unidad_academica_repo;

pub use academico_repo::AcademicoRepo;
pub use apoyo_repo::ApoyoRepo;
pub use convocatoria_repo::ConvocatoriaRepo;
pub use cuestionario_repo::CuestionarioRepo;
pub use estadisticas_repo::EstadisticasRepo;
pub use estatus_repo::EstatusRepo;
pub use estudiante_repo::EstudianteRepo;
pub use foto_academico_repo::FotoAcademicoRepo;
pub use fondo_repo::FondoRepo;
pub use inst_convo_repo::InstConvoRepo;
pub use kth_repo::KthRepo;
pub use proyecto_academico_repo::ProyectoAcademicoRepo;
pub use proyecto_repo::ProyectoRepo;
pub use respuesta_cuestionario_repo::RespuestaCuestionarioRepo;
pub use tag_repo::TagRepo;
pub use tematica_repo::TematicaRepo;
pub use tipo_apoyo_repo::TipoApoyoRepo;
pub use tipo_convo_repo::TipoConvoRepo;
pub use unidad_academica_repo::UnidadAcademicaRepo;
