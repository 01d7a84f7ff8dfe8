//! Integration tests for the repository layer against a real database:
//! - create / find round trips
//! - partial updates (absent vs null vs value, empty update, null on NOT NULL)
//! - delete of missing rows
//! - cascade and set-null behaviour
//! - foreign key violations

use assert_matches::assert_matches;
use idi_core::patch::Patch;
use idi_db::models::academico::{CreateAcademico, CreateFotoAcademico, UpdateAcademico, UpdateFotoAcademico};
use idi_db::models::apoyo::{CreateApoyo, UpdateApoyo};
use idi_db::models::kth::{CreateKth, UpdateKth};
use idi_db::models::proyecto::{CreateProyecto, UpdateProyecto};
use idi_db::models::proyecto_academico::CreateProyectoAcademico;
use idi_db::models::tematica::{CreateTematica, UpdateTematica};
use idi_db::models::unidad_academica::CreateUnidadAcademica;
use idi_db::repositories::{
    AcademicoRepo, ApoyoRepo, FotoAcademicoRepo, KthRepo, ProyectoAcademicoRepo, ProyectoRepo,
    TematicaRepo, UnidadAcademicaRepo,
};
use idi_db::update::UpdateError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_academico(nombre: &str, id_unidad: Option<i64>) -> CreateAcademico {
    CreateAcademico {
        nombre: nombre.to_string(),
        email: format!("{}@pucv.cl", nombre.to_lowercase()),
        a_materno: "Rojas".to_string(),
        a_paterno: "Soto".to_string(),
        id_unidad,
    }
}

fn new_proyecto(nombre: &str) -> CreateProyecto {
    CreateProyecto {
        nombre: nombre.to_string(),
        monto: Some(1_500_000),
        fecha_postulacion: chrono::NaiveDate::from_ymd_opt(2024, 3, 15),
        comentarios: None,
        unidad: None,
        id_tematica: None,
        id_estatus: None,
        id_kth: None,
        convocatoria: Some("FONDEF IDeA".to_string()),
        tipo_convocatoria: None,
        inst_conv: None,
        detalle_apoyo: None,
        apoyo: None,
    }
}

async fn new_unidad(pool: &PgPool, nombre: &str) -> i64 {
    UnidadAcademicaRepo::create(
        pool,
        &CreateUnidadAcademica {
            nombre: nombre.to_string(),
        },
    )
    .await
    .unwrap()
    .id_unidad
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_find(pool: PgPool) {
    let unidad = new_unidad(&pool, "Escuela de Ingeniería").await;
    let created = AcademicoRepo::create(&pool, &new_academico("Ana", Some(unidad)))
        .await
        .unwrap();

    let found = AcademicoRepo::find_by_id(&pool, created.id_academico)
        .await
        .unwrap()
        .expect("academico should exist");
    assert_eq!(found.nombre, "Ana");
    assert_eq!(found.email, "ana@pucv.cl");
    assert_eq!(found.id_unidad, Some(unidad));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    assert!(AcademicoRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
    assert!(ProyectoRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_academicos_ordered_by_nombre(pool: PgPool) {
    for nombre in ["Carla", "Ana", "Benito"] {
        AcademicoRepo::create(&pool, &new_academico(nombre, None))
            .await
            .unwrap();
    }
    let nombres: Vec<String> = AcademicoRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.nombre)
        .collect();
    assert_eq!(nombres, ["Ana", "Benito", "Carla"]);
}

// ---------------------------------------------------------------------------
// Partial updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_only_touches_present_fields(pool: PgPool) {
    let unidad = new_unidad(&pool, "Escuela de Química").await;
    let created = AcademicoRepo::create(&pool, &new_academico("Ana", Some(unidad)))
        .await
        .unwrap();

    let input = UpdateAcademico {
        a_paterno: Patch::Value("Fuentes".to_string()),
        ..Default::default()
    };
    let updated = AcademicoRepo::update(&pool, created.id_academico, &input)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.a_paterno, "Fuentes");
    assert_eq!(updated.nombre, "Ana");
    assert_eq!(updated.id_unidad, Some(unidad));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_explicit_null_clears_column(pool: PgPool) {
    let unidad = new_unidad(&pool, "Escuela de Física").await;
    let created = AcademicoRepo::create(&pool, &new_academico("Ana", Some(unidad)))
        .await
        .unwrap();

    let input = UpdateAcademico {
        id_unidad: Patch::Null,
        ..Default::default()
    };
    let updated = AcademicoRepo::update(&pool, created.id_academico, &input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id_unidad, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_no_fields_is_rejected(pool: PgPool) {
    let tematica = TematicaRepo::create(
        &pool,
        &CreateTematica {
            nombre: Some("Energía".to_string()),
        },
    )
    .await
    .unwrap();

    let result = TematicaRepo::update(&pool, tematica.id_tematica, &UpdateTematica::default()).await;
    assert_matches!(result, Err(UpdateError::NoFields));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_null_on_required_column_is_rejected(pool: PgPool) {
    let apoyo = ApoyoRepo::create(
        &pool,
        &CreateApoyo {
            tipo: "Financiero".to_string(),
            detalle: "Cofinanciamiento".to_string(),
        },
    )
    .await
    .unwrap();

    let input = UpdateApoyo {
        detalle: Patch::Null,
        ..Default::default()
    };
    let result = ApoyoRepo::update(&pool, apoyo.id_apoyo, &input).await;
    assert_matches!(result, Err(UpdateError::NullNotAllowed("detalle")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let input = UpdateTematica {
        nombre: Patch::Value("Salud".to_string()),
    };
    let result = TematicaRepo::update(&pool, 4242, &input).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_replace_clears_omitted_nullable_columns(pool: PgPool) {
    let created = ProyectoRepo::create(&pool, &new_proyecto("Sensores"))
        .await
        .unwrap();
    assert!(created.monto.is_some());

    let replacement = CreateProyecto {
        monto: None,
        convocatoria: None,
        ..new_proyecto("Sensores v2")
    };
    let replaced = ProyectoRepo::update(&pool, created.id_proyecto, &UpdateProyecto::from(replacement))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.nombre, "Sensores v2");
    assert_eq!(replaced.monto, None);
    assert_eq!(replaced.convocatoria, None);
    assert_eq!(replaced.fecha_postulacion, created.fecha_postulacion);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kth_replace_keeps_creation_date(pool: PgPool) {
    let proyecto = ProyectoRepo::create(&pool, &new_proyecto("Baterías"))
        .await
        .unwrap();
    let input = CreateKth {
        id_proyecto: proyecto.id_proyecto,
        trl: Some(3),
        crl: None,
        team: None,
        brl: None,
        iprl: None,
        frl: None,
        fecha_creacion: None,
    };
    let created = KthRepo::create(&pool, &input).await.unwrap();
    assert!(created.fecha_creacion.is_some());

    let replacement = CreateKth {
        trl: Some(5),
        ..input
    };
    let replaced = KthRepo::update(&pool, created.id_kth, &UpdateKth::from(replacement))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.trl, Some(5));
    assert_eq!(replaced.fecha_creacion, created.fecha_creacion);
}

// ---------------------------------------------------------------------------
// Deletes and referential behaviour
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_returns_false(pool: PgPool) {
    assert!(!AcademicoRepo::delete(&pool, 9999).await.unwrap());
    assert!(!ProyectoRepo::delete(&pool, 9999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_academico_cascades_to_photos_and_assignments(pool: PgPool) {
    let academico = AcademicoRepo::create(&pool, &new_academico("Ana", None))
        .await
        .unwrap();
    let proyecto = ProyectoRepo::create(&pool, &new_proyecto("Cascada"))
        .await
        .unwrap();
    let foto = FotoAcademicoRepo::create(
        &pool,
        academico.id_academico,
        &CreateFotoAcademico {
            link: Some("https://fotos.pucv.cl/ana.jpg".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let asignacion = ProyectoAcademicoRepo::create(
        &pool,
        &CreateProyectoAcademico {
            id_proyecto: Some(proyecto.id_proyecto),
            id_academico: Some(academico.id_academico),
            jefe: Some(1),
        },
    )
    .await
    .unwrap();

    assert!(AcademicoRepo::delete(&pool, academico.id_academico).await.unwrap());

    assert!(FotoAcademicoRepo::find_for_academico(&pool, academico.id_academico, foto.id_imagen)
        .await
        .unwrap()
        .is_none());
    assert!(ProyectoAcademicoRepo::find_by_id(&pool, asignacion.id)
        .await
        .unwrap()
        .is_none());
    assert!(ProyectoRepo::find_by_id(&pool, proyecto.id_proyecto)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_unidad_detaches_academicos(pool: PgPool) {
    let unidad = new_unidad(&pool, "Escuela de Historia").await;
    let academico = AcademicoRepo::create(&pool, &new_academico("Ana", Some(unidad)))
        .await
        .unwrap();

    assert!(UnidadAcademicaRepo::delete(&pool, unidad).await.unwrap());

    let found = AcademicoRepo::find_by_id(&pool, academico.id_academico)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id_unidad, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_key_violation_is_a_database_error(pool: PgPool) {
    let result = AcademicoRepo::create(&pool, &new_academico("Ana", Some(777))).await;
    let err = result.expect_err("unknown unit should be rejected");
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_photo_is_scoped_to_owner(pool: PgPool) {
    let ana = AcademicoRepo::create(&pool, &new_academico("Ana", None)).await.unwrap();
    let beto = AcademicoRepo::create(&pool, &new_academico("Beto", None)).await.unwrap();
    let foto = FotoAcademicoRepo::create(&pool, ana.id_academico, &CreateFotoAcademico::default())
        .await
        .unwrap();

    assert!(FotoAcademicoRepo::find_for_academico(&pool, beto.id_academico, foto.id_imagen)
        .await
        .unwrap()
        .is_none());
    assert!(!FotoAcademicoRepo::delete(&pool, beto.id_academico, foto.id_imagen)
        .await
        .unwrap());

    let updated = FotoAcademicoRepo::update(
        &pool,
        foto.id_imagen,
        &UpdateFotoAcademico {
            foto: Patch::Value("aGVsbG8=".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.foto.as_deref(), Some("aGVsbG8="));
    assert_eq!(updated.link, None);
}
