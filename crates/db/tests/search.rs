//! Case-insensitive substring searches and filters.

use idi_db::models::academico::CreateAcademico;
use idi_db::models::apoyo::CreateApoyo;
use idi_db::models::convocatoria::CreateConvocatoria;
use idi_db::models::cuestionario::CreateCuestionario;
use idi_db::models::estatus::CreateEstatus;
use idi_db::models::estudiante::CreateEstudiante;
use idi_db::models::inst_convo::CreateInstConvo;
use idi_db::models::proyecto::CreateProyecto;
use idi_db::models::respuesta_cuestionario::CreateRespuestaCuestionario;
use idi_db::models::tag::CreateTag;
use idi_db::models::tipo_apoyo::CreateTipoApoyo;
use idi_db::models::tipo_convo::CreateTipoConvo;
use idi_db::models::unidad_academica::CreateUnidadAcademica;
use idi_db::repositories::{
    AcademicoRepo, ApoyoRepo, ConvocatoriaRepo, CuestionarioRepo, EstatusRepo, EstudianteRepo,
    InstConvoRepo, ProyectoRepo, RespuestaCuestionarioRepo, TagRepo, TipoApoyoRepo, TipoConvoRepo,
    UnidadAcademicaRepo,
};
use sqlx::PgPool;

fn new_academico(nombre: &str, a_paterno: &str, a_materno: &str) -> CreateAcademico {
    CreateAcademico {
        nombre: nombre.to_string(),
        email: format!("{}@pucv.cl", nombre.to_lowercase()),
        a_materno: a_materno.to_string(),
        a_paterno: a_paterno.to_string(),
        id_unidad: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_academico_search_matches_any_name_column(pool: PgPool) {
    AcademicoRepo::create(&pool, &new_academico("María", "González", "Pérez")).await.unwrap();
    AcademicoRepo::create(&pool, &new_academico("Pedro", "Muñoz", "Gonzalo")).await.unwrap();
    AcademicoRepo::create(&pool, &new_academico("Lucía", "Reyes", "Díaz")).await.unwrap();

    let found = AcademicoRepo::search(&pool, "GONZ").await.unwrap();
    assert_eq!(found.len(), 2);

    let found = AcademicoRepo::search(&pool, "lucí").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].a_paterno, "Reyes");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_without_matches_is_empty(pool: PgPool) {
    AcademicoRepo::create(&pool, &new_academico("María", "González", "Pérez")).await.unwrap();

    assert!(AcademicoRepo::search(&pool, "zzz").await.unwrap().is_empty());
    assert!(TagRepo::search(&pool, "nada").await.unwrap().is_empty());
    assert!(ProyectoRepo::search_by_nombre(&pool, "nada").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wildcards_in_term_match_literally(pool: PgPool) {
    TagRepo::create(&pool, &CreateTag { tag: "100% financiado".to_string() }).await.unwrap();
    TagRepo::create(&pool, &CreateTag { tag: "parcial".to_string() }).await.unwrap();

    assert_eq!(TagRepo::search(&pool, "%").await.unwrap().len(), 1);
    assert!(TagRepo::search(&pool, "_arcial_").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_apoyo_search_by_tipo_and_detalle(pool: PgPool) {
    ApoyoRepo::create(
        &pool,
        &CreateApoyo {
            tipo: "Financiero".to_string(),
            detalle: "Cofinanciamiento empresa".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(ApoyoRepo::search_by_tipo(&pool, "finan").await.unwrap().len(), 1);
    assert_eq!(ApoyoRepo::search_by_detalle(&pool, "EMPRESA").await.unwrap().len(), 1);
    assert!(ApoyoRepo::search_by_detalle(&pool, "Financiero").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_estudiantes_linked_to_project(pool: PgPool) {
    let proyecto = ProyectoRepo::create(
        &pool,
        &CreateProyecto {
            nombre: "Tesis".to_string(),
            monto: None,
            fecha_postulacion: None,
            comentarios: None,
            unidad: None,
            id_tematica: None,
            id_estatus: None,
            id_kth: None,
            convocatoria: None,
            tipo_convocatoria: None,
            inst_conv: None,
            detalle_apoyo: None,
            apoyo: None,
        },
    )
    .await
    .unwrap();
    let estudiante = EstudianteRepo::create(
        &pool,
        &CreateEstudiante {
            nombre: "Tomás".to_string(),
            a_paterno: "Leiva".to_string(),
        },
    )
    .await
    .unwrap();

    EstudianteRepo::link_proyecto(&pool, proyecto.id_proyecto, estudiante.id_estudiantes)
        .await
        .unwrap();
    // Linking twice is harmless.
    EstudianteRepo::link_proyecto(&pool, proyecto.id_proyecto, estudiante.id_estudiantes)
        .await
        .unwrap();

    let roster = EstudianteRepo::list_by_proyecto(&pool, proyecto.id_proyecto).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].a_paterno, "Leiva");

    assert!(EstudianteRepo::unlink_proyecto(&pool, proyecto.id_proyecto, estudiante.id_estudiantes)
        .await
        .unwrap());
    assert!(!EstudianteRepo::unlink_proyecto(&pool, proyecto.id_proyecto, estudiante.id_estudiantes)
        .await
        .unwrap());
    assert!(EstudianteRepo::list_by_proyecto(&pool, proyecto.id_proyecto).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_catalogue_searches(pool: PgPool) {
    EstatusRepo::create(&pool, &CreateEstatus { tipo: Some("Postulado".to_string()) }).await.unwrap();
    EstatusRepo::create(&pool, &CreateEstatus { tipo: None }).await.unwrap();
    TipoApoyoRepo::create(&pool, &CreateTipoApoyo { tipo: "Pecuniario".to_string() }).await.unwrap();
    CuestionarioRepo::create(
        &pool,
        &CreateCuestionario { pregunta: "¿Su proyecto tiene socios externos?".to_string() },
    )
    .await
    .unwrap();

    assert_eq!(EstatusRepo::search_by_tipo(&pool, "post").await.unwrap().len(), 1);
    assert_eq!(TipoApoyoRepo::search_by_tipo(&pool, "PECU").await.unwrap().len(), 1);
    assert_eq!(CuestionarioRepo::search_by_pregunta(&pool, "socios").await.unwrap().len(), 1);
    assert!(CuestionarioRepo::search_by_pregunta(&pool, "patentes").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_convocatorias_by_nombre_tipo_and_institucion(pool: PgPool) {
    let concurso = TipoConvoRepo::create(&pool, &CreateTipoConvo { nombre: Some("Concurso".to_string()) })
        .await
        .unwrap();
    let ventanilla = TipoConvoRepo::create(&pool, &CreateTipoConvo { nombre: Some("Ventanilla".to_string()) })
        .await
        .unwrap();
    let anid = InstConvoRepo::create(&pool, &CreateInstConvo { nombre: Some("ANID".to_string()) })
        .await
        .unwrap();
    let corfo = InstConvoRepo::create(&pool, &CreateInstConvo { nombre: Some("CORFO".to_string()) })
        .await
        .unwrap();

    for (nombre, tipo, institucion) in [
        ("Fondecyt Regular", concurso.id, anid.id),
        ("Fondef IDeA", concurso.id, anid.id),
        ("Crea y Valida", ventanilla.id, corfo.id),
    ] {
        ConvocatoriaRepo::create(
            &pool,
            &CreateConvocatoria { nombre: nombre.to_string(), tipo, institucion },
        )
        .await
        .unwrap();
    }

    assert_eq!(ConvocatoriaRepo::search_by_nombre(&pool, "fonde").await.unwrap().len(), 2);
    assert_eq!(ConvocatoriaRepo::list_by_tipo(&pool, concurso.id).await.unwrap().len(), 2);

    let por_corfo = ConvocatoriaRepo::list_by_institucion(&pool, corfo.id).await.unwrap();
    assert_eq!(por_corfo.len(), 1);
    assert_eq!(por_corfo[0].nombre, "Crea y Valida");

    assert_eq!(TipoConvoRepo::search_by_nombre(&pool, "vent").await.unwrap().len(), 1);
    assert_eq!(InstConvoRepo::search_by_nombre(&pool, "anid").await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_respuestas_by_investigador_and_escuela(pool: PgPool) {
    let escuela = UnidadAcademicaRepo::create(
        &pool,
        &CreateUnidadAcademica { nombre: "Escuela de Ingeniería Química".to_string() },
    )
    .await
    .unwrap();
    let maria = AcademicoRepo::create(&pool, &new_academico("María", "González", "Pérez")).await.unwrap();
    let pedro = AcademicoRepo::create(&pool, &new_academico("Pedro", "Muñoz", "Gonzalo")).await.unwrap();

    let respuesta = |investigador: i64, primera: &str| CreateRespuestaCuestionario {
        nombre_investigador: investigador,
        escuela: escuela.id_unidad,
        respuesta_1: Some(primera.to_string()),
        respuesta_2: None,
        respuesta_3: None,
        respuesta_4: None,
        respuesta_5: None,
        respuesta_6: None,
        respuesta_7: None,
        respuesta_8: None,
        respuesta_9: None,
    };
    let primera = RespuestaCuestionarioRepo::create(&pool, &respuesta(maria.id_academico, "Sí"))
        .await
        .unwrap();
    let segunda = RespuestaCuestionarioRepo::create(&pool, &respuesta(maria.id_academico, "No"))
        .await
        .unwrap();
    let tercera = RespuestaCuestionarioRepo::create(&pool, &respuesta(pedro.id_academico, "Sí"))
        .await
        .unwrap();

    let de_maria = RespuestaCuestionarioRepo::list_by_investigador(&pool, maria.id_academico)
        .await
        .unwrap();
    let ids: Vec<i64> = de_maria.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![primera.id, segunda.id]);

    let de_escuela = RespuestaCuestionarioRepo::list_by_escuela(&pool, escuela.id_unidad)
        .await
        .unwrap();
    let ids: Vec<i64> = de_escuela.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![primera.id, segunda.id, tercera.id]);

    let todas = RespuestaCuestionarioRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = todas.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![primera.id, segunda.id, tercera.id]);
    assert!(RespuestaCuestionarioRepo::list_by_escuela(&pool, escuela.id_unidad + 1)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unidades_are_listed_by_id(pool: PgPool) {
    let mut ids = Vec::new();
    for nombre in ["Escuela de Química", "Escuela de Agronomía", "Escuela de Música"] {
        let unidad = UnidadAcademicaRepo::create(&pool, &CreateUnidadAcademica { nombre: nombre.to_string() })
            .await
            .unwrap();
        ids.push(unidad.id_unidad);
    }

    let listed: Vec<i64> = UnidadAcademicaRepo::list(&pool)
        .await
        .unwrap()
        .iter()
        .map(|u| u.id_unidad)
        .collect();
    assert_eq!(listed, ids);

    let found: Vec<i64> = UnidadAcademicaRepo::search_by_nombre(&pool, "escuela")
        .await
        .unwrap()
        .iter()
        .map(|u| u.id_unidad)
        .collect();
    assert_eq!(found, ids);
}
