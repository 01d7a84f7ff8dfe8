//! Repository for the `proyecto` table and its read views.

use idi_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::contains_pattern;
use crate::models::proyecto::{
    AcademicosPorProyecto, CreateProyecto, CreateProyectoConAcademicos, Proyecto,
    ProyectoConAcademicos, ProyectoDetalle, UpdateProyecto,
};
use crate::update::{PartialUpdate, UpdateError};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id_proyecto, nombre, monto, fecha_postulacion, comentarios, unidad, \
                       id_tematica, id_estatus, id_kth, convocatoria, tipo_convocatoria, \
                       inst_conv, detalle_apoyo, apoyo";

const INSERT_COLUMNS: &str = "nombre, monto, fecha_postulacion, comentarios, unidad, \
                              id_tematica, id_estatus, id_kth, convocatoria, tipo_convocatoria, \
                              inst_conv, detalle_apoyo, apoyo";

/// Catalogue ids replaced by their display names.
const DETALLE_QUERY: &str = "\
    SELECT p.id_proyecto, p.nombre, p.monto, p.fecha_postulacion, p.comentarios,
           t.nombre AS tematica,
           e.tipo AS estatus,
           p.convocatoria,
           tc.nombre AS nombre_convo,
           ic.nombre AS institucion,
           p.detalle_apoyo,
           ap.tipo AS apoyo,
           u.nombre AS unidad
    FROM proyecto p
    LEFT JOIN tematica t ON t.id_tematica = p.id_tematica
    LEFT JOIN estatus e ON e.id_estatus = p.id_estatus
    LEFT JOIN tipo_convo tc ON tc.id = p.tipo_convocatoria
    LEFT JOIN inst_convo ic ON ic.id = p.inst_conv
    LEFT JOIN apoyo ap ON ap.id_apoyo = p.apoyo
    LEFT JOIN unidadacademica u ON u.id_unidad = p.unidad
    ORDER BY p.id_proyecto";

/// One row per project with its researchers folded into a JSON array.
/// `FILTER` keeps projects without assignments at `[]` instead of `[null]`.
/// `{filter}` is replaced with an optional `WHERE` clause.
const ACADEMICOS_QUERY: &str = "\
    SELECT p.id_proyecto,
           p.nombre AS nombre_proyecto,
           COALESCE(
               JSON_AGG(
                   JSON_BUILD_OBJECT(
                       'id_academico', a.id_academico,
                       'nombre', a.nombre,
                       'a_paterno', a.a_paterno,
                       'jefe', pa.jefe
                   )
                   ORDER BY a.a_paterno, a.nombre, a.id_academico
               ) FILTER (WHERE a.id_academico IS NOT NULL),
               '[]'::json
           ) AS academicos
    FROM proyecto p
    LEFT JOIN proyectoacademico pa ON pa.id_proyecto = p.id_proyecto
    LEFT JOIN academico a ON a.id_academico = pa.id_academico
    {filter}
    GROUP BY p.id_proyecto, p.nombre
    ORDER BY p.id_proyecto";

/// Provides CRUD, filter and aggregation queries for projects.
pub struct ProyectoRepo;

impl ProyectoRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProyecto) -> Result<Proyecto, sqlx::Error> {
        let query = format!(
            "INSERT INTO proyecto ({INSERT_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(&input.nombre)
            .bind(input.monto)
            .bind(input.fecha_postulacion)
            .bind(&input.comentarios)
            .bind(input.unidad)
            .bind(input.id_tematica)
            .bind(input.id_estatus)
            .bind(input.id_kth)
            .bind(&input.convocatoria)
            .bind(input.tipo_convocatoria)
            .bind(input.inst_conv)
            .bind(&input.detalle_apoyo)
            .bind(input.apoyo)
            .fetch_one(pool)
            .await
    }

    /// Insert a project and its researcher assignments in one statement, so
    /// either both land or neither does.
    pub async fn create_con_academicos(
        pool: &PgPool,
        input: &CreateProyectoConAcademicos,
    ) -> Result<ProyectoConAcademicos, sqlx::Error> {
        let query = format!(
            "WITH nuevo AS (
                 INSERT INTO proyecto ({INSERT_COLUMNS})
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                 RETURNING {COLUMNS}
             ),
             asignados AS (
                 INSERT INTO proyectoacademico (id_proyecto, id_academico, jefe)
                 SELECT nuevo.id_proyecto, x.id, x.jefe
                 FROM nuevo, jsonb_to_recordset($14) AS x(id BIGINT, jefe INTEGER)
                 RETURNING id, id_proyecto, id_academico, jefe
             )
             SELECT nuevo.*,
                    COALESCE(
                        (SELECT JSON_AGG(asignados ORDER BY asignados.id) FROM asignados),
                        '[]'::json
                    ) AS asignaciones
             FROM nuevo"
        );
        let p = &input.proyecto;
        sqlx::query_as::<_, ProyectoConAcademicos>(&query)
            .bind(&p.nombre)
            .bind(p.monto)
            .bind(p.fecha_postulacion)
            .bind(&p.comentarios)
            .bind(p.unidad)
            .bind(p.id_tematica)
            .bind(p.id_estatus)
            .bind(p.id_kth)
            .bind(&p.convocatoria)
            .bind(p.tipo_convocatoria)
            .bind(p.inst_conv)
            .bind(&p.detalle_apoyo)
            .bind(p.apoyo)
            .bind(Json(&input.academicos))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Proyecto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyecto WHERE id_proyecto = $1");
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Proyecto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyecto ORDER BY id_proyecto");
        sqlx::query_as::<_, Proyecto>(&query).fetch_all(pool).await
    }

    /// All projects with catalogue names resolved.
    pub async fn list_detalle(pool: &PgPool) -> Result<Vec<ProyectoDetalle>, sqlx::Error> {
        sqlx::query_as::<_, ProyectoDetalle>(DETALLE_QUERY)
            .fetch_all(pool)
            .await
    }

    /// Every project with the researchers assigned to it.
    pub async fn list_academicos(pool: &PgPool) -> Result<Vec<AcademicosPorProyecto>, sqlx::Error> {
        let query = ACADEMICOS_QUERY.replace("{filter}", "");
        sqlx::query_as::<_, AcademicosPorProyecto>(&query)
            .fetch_all(pool)
            .await
    }

    /// The researchers assigned to one project. `None` if the project does
    /// not exist; an existing project without assignments yields an empty list.
    pub async fn find_academicos(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AcademicosPorProyecto>, sqlx::Error> {
        let query = ACADEMICOS_QUERY.replace("{filter}", "WHERE p.id_proyecto = $1");
        sqlx::query_as::<_, AcademicosPorProyecto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_estatus(pool: &PgPool, id_estatus: DbId) -> Result<Vec<Proyecto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proyecto WHERE id_estatus = $1 ORDER BY id_proyecto"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(id_estatus)
            .fetch_all(pool)
            .await
    }

    /// Projects whose free-text call name contains `nombre`.
    pub async fn search_by_convocatoria(pool: &PgPool, nombre: &str) -> Result<Vec<Proyecto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proyecto WHERE convocatoria ILIKE $1 ORDER BY id_proyecto"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(contains_pattern(nombre))
            .fetch_all(pool)
            .await
    }

    pub async fn search_by_nombre(pool: &PgPool, nombre: &str) -> Result<Vec<Proyecto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proyecto WHERE nombre ILIKE $1 ORDER BY id_proyecto"
        );
        sqlx::query_as::<_, Proyecto>(&query)
            .bind(contains_pattern(nombre))
            .fetch_all(pool)
            .await
    }

    /// Apply the fields present in `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProyecto,
    ) -> Result<Option<Proyecto>, UpdateError> {
        let mut query = PartialUpdate::new("proyecto");
        query
            .set_required("nombre", &input.nombre)
            .set("monto", &input.monto)
            .set("fecha_postulacion", &input.fecha_postulacion)
            .set("comentarios", &input.comentarios)
            .set("unidad", &input.unidad)
            .set("id_tematica", &input.id_tematica)
            .set("id_estatus", &input.id_estatus)
            .set("id_kth", &input.id_kth)
            .set("convocatoria", &input.convocatoria)
            .set("tipo_convocatoria", &input.tipo_convocatoria)
            .set("inst_conv", &input.inst_conv)
            .set("detalle_apoyo", &input.detalle_apoyo)
            .set("apoyo", &input.apoyo);
        query.fetch_optional(pool, "id_proyecto", id, COLUMNS).await
    }

    /// Delete a project. Assignments, assessments and student links go with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proyecto WHERE id_proyecto = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
