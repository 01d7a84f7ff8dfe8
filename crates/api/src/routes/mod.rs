pub mod academico;
pub mod apoyo;
pub mod convocatoria;
pub mod cuestionario;
pub mod estadisticas;
pub mod estatus;
pub mod estudiante;
pub mod fondo;
pub mod health;
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

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /academicos                  researchers, search, photos
/// /unidades                    academic units
/// /proyectos                   projects, detail view, researcher aggregation
/// /proyectoacademico           project/researcher assignments
/// /kth                         readiness assessments
/// /convocatorias               funding calls
/// /tipo-convo                  funding call types
/// /inst-convo                  funding call institutions
/// /fondos                      funding sources
/// /apoyos                      support records
/// /tags                        support detail tags
/// /tipo-apoyo                  support types
/// /tematicas                   research topics
/// /estatus                     project statuses
/// /cuestionarios               questionnaire questions
/// /respuestas-cuestionario     questionnaire answers
/// /estudiantes                 students and project rosters
/// /estadisticas                aggregate reports
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/academicos", academico::router())
        .nest("/unidades", unidad_academica::router())
        .nest("/proyectos", proyecto::router())
        .nest("/proyectoacademico", proyecto_academico::router())
        .nest("/kth", kth::router())
        .nest("/convocatorias", convocatoria::router())
        .nest("/tipo-convo", tipo_convo::router())
        .nest("/inst-convo", inst_convo::router())
        .nest("/fondos", fondo::router())
        .nest("/apoyos", apoyo::router())
        .nest("/tags", tag::router())
        .nest("/tipo-apoyo", tipo_apoyo::router())
        .nest("/tematicas", tematica::router())
        .nest("/estatus", estatus::router())
        .nest("/cuestionarios", cuestionario::router())
        .nest("/respuestas-cuestionario", respuesta_cuestionario::router())
        .nest("/estudiantes", estudiante::router())
        .nest("/estadisticas", estadisticas::router())
}
