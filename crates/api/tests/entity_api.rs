//! HTTP-level CRUD tests: status codes, partial update semantics and error
//! bodies, exercised through the full router.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, patch_json, post_json, post_raw, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn seed_unidad(pool: &PgPool, nombre: &str) -> i64 {
    let unidad = create(pool, "/unidades", json!({ "nombre": nombre })).await;
    unidad["id_unidad"].as_i64().unwrap()
}

fn academico_body(id_unidad: Option<i64>) -> serde_json::Value {
    json!({
        "nombre": "Ana",
        "email": "ana.rojas@pucv.cl",
        "a_paterno": "Rojas",
        "a_materno": "Vidal",
        "id_unidad": id_unidad,
    })
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_and_row(pool: PgPool) {
    let id_unidad = seed_unidad(&pool, "Escuela de Ingeniería").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/academicos", academico_body(Some(id_unidad))).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id_academico"].as_i64().unwrap() > 0);
    assert_eq!(json["nombre"], "Ana");
    assert_eq!(json["id_unidad"], id_unidad);

    let id = json["id_academico"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/academicos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], "ana.rojas@pucv.cl");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/academicos/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Academico with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_plain_array(pool: PgPool) {
    seed_unidad(&pool, "Escuela de Comercio").await;
    seed_unidad(&pool, "Escuela de Derecho").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/unidades").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_email_is_a_validation_error(pool: PgPool) {
    let mut body = academico_body(None);
    body["email"] = json!("not-an-email");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/academicos", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().starts_with("email:"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_is_a_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/unidades", "{\"nombre\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_required_field_is_a_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/academicos", json!({ "nombre": "Ana" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_id_is_a_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/academicos/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_foreign_key_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/academicos", academico_body(Some(424242))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Replace / partial update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_replaces_and_clears_omitted_nullable_fields(pool: PgPool) {
    let id_unidad = seed_unidad(&pool, "Escuela de Ingeniería").await;
    let created = create(&pool, "/academicos", academico_body(Some(id_unidad))).await;
    let id = created["id_academico"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/academicos/{id}"),
        json!({
            "nombre": "Ana María",
            "email": "ana.maria@pucv.cl",
            "a_paterno": "Rojas",
            "a_materno": "Vidal",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["nombre"], "Ana María");
    assert!(json["id_unidad"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_touches_only_sent_fields(pool: PgPool) {
    let id_unidad = seed_unidad(&pool, "Escuela de Ingeniería").await;
    let created = create(&pool, "/academicos", academico_body(Some(id_unidad))).await;
    let id = created["id_academico"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, &format!("/academicos/{id}"), json!({ "a_materno": "Soto" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["a_materno"], "Soto");
    assert_eq!(json["nombre"], "Ana");
    assert_eq!(json["id_unidad"], id_unidad);

    // Explicit null clears a nullable column.
    let app = common::build_test_app(pool);
    let response = patch_json(app, &format!("/academicos/{id}"), json!({ "id_unidad": null })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["id_unidad"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_patch_is_rejected(pool: PgPool) {
    let created = create(&pool, "/academicos", academico_body(None)).await;
    let id = created["id_academico"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(app, &format!("/academicos/{id}"), json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "No fields to update");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_on_required_field_is_rejected(pool: PgPool) {
    let created = create(&pool, "/academicos", academico_body(None)).await;
    let id = created["id_academico"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(app, &format!("/academicos/{id}"), json!({ "nombre": null })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Field 'nombre' cannot be null");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_missing_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/unidades/777", json!({ "nombre": "Nada" })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_204_then_404(pool: PgPool) {
    let id = seed_unidad(&pool, "Escuela de Música").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/unidades/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/unidades/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/unidades/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_referenced_row_is_rejected(pool: PgPool) {
    let tipo = create(&pool, "/tipo-convo", json!({ "nombre": "Concurso" })).await;
    let inst = create(&pool, "/inst-convo", json!({ "nombre": "ANID" })).await;
    create(
        &pool,
        "/convocatorias",
        json!({ "nombre": "Fondecyt", "tipo": tipo["id"], "institucion": inst["id"] }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/tipo-convo/{}", tipo["id"])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_any_name_column(pool: PgPool) {
    create(&pool, "/academicos", academico_body(None)).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/academicos/buscar/rOJ").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(app, "/academicos/buscar/zzz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_query_param_is_required(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/fondos/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    create(&pool, "/fondos", json!({ "nombre": "Fondo Semilla" })).await;
    let app = common::build_test_app(pool);
    let response = get(app, "/fondos/search?nombre=semilla").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await[0]["nombre"], "Fondo Semilla");
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn photos_are_scoped_to_their_owner(pool: PgPool) {
    let ana = create(&pool, "/academicos", academico_body(None)).await;
    let mut other = academico_body(None);
    other["email"] = json!("luis@pucv.cl");
    let luis = create(&pool, "/academicos", other).await;
    let ana_id = ana["id_academico"].as_i64().unwrap();
    let luis_id = luis["id_academico"].as_i64().unwrap();

    let foto = create(
        &pool,
        &format!("/academicos/{ana_id}/fotos"),
        json!({ "link": "https://img.pucv.cl/ana.png" }),
    )
    .await;
    let foto_id = foto["id_imagen"].as_i64().unwrap();
    assert_eq!(foto["id_academico"], ana_id);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/academicos/{luis_id}/fotos/{foto_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/academicos/{luis_id}/fotos/{foto_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/academicos/fotos-global").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/academicos/{ana_id}/fotos/{foto_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn photo_for_missing_academico_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/academicos/5000/fotos", json!({ "foto": "aGVsbG8=" })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Every resource
// ---------------------------------------------------------------------------

/// A resource collection, the key field of its rows and a valid create body.
struct Resource {
    path: String,
    key: &'static str,
    body: serde_json::Value,
    /// Photos are patched in place and have no PUT route.
    replace: bool,
}

/// Parents referenced by the resources under test. Nothing in the table
/// creates rows that point at one another, so each row can be deleted.
async fn seed_parents(pool: &PgPool) -> Vec<Resource> {
    let id_unidad = seed_unidad(pool, "Escuela de Ingeniería Civil").await;
    let academico = create(pool, "/academicos", academico_body(Some(id_unidad))).await;
    let id_academico = academico["id_academico"].as_i64().unwrap();
    let proyecto = create(pool, "/proyectos", json!({ "nombre": "Proyecto base" })).await;
    let id_proyecto = proyecto["id_proyecto"].as_i64().unwrap();
    let tipo = create(pool, "/tipo-convo", json!({ "nombre": "Concurso" })).await;
    let inst = create(pool, "/inst-convo", json!({ "nombre": "ANID" })).await;

    let resource = |path: &str, key: &'static str, body: serde_json::Value| Resource {
        replace: !path.ends_with("/fotos"),
        path: path.to_string(),
        key,
        body,
    };

    vec![
        resource("/academicos", "id_academico", academico_body(Some(id_unidad))),
        resource(
            &format!("/academicos/{id_academico}/fotos"),
            "id_imagen",
            json!({ "foto": "aGVsbG8=", "link": "https://img.pucv.cl/a.png" }),
        ),
        resource("/unidades", "id_unidad", json!({ "nombre": "Escuela de Física" })),
        resource(
            "/proyectos",
            "id_proyecto",
            json!({
                "nombre": "Secador solar",
                "monto": 2500000,
                "fecha_postulacion": "2025-04-30",
                "comentarios": "Primera postulación",
                "unidad": id_unidad,
                "tipo_convocatoria": tipo["id"],
                "inst_conv": inst["id"],
            }),
        ),
        resource(
            "/proyectoacademico",
            "id",
            json!({ "id_proyecto": id_proyecto, "id_academico": id_academico, "jefe": 0 }),
        ),
        resource(
            "/kth",
            "id_kth",
            json!({ "id_proyecto": id_proyecto, "trl": 3, "crl": 2, "team": 4, "brl": 1, "iprl": 2, "frl": 1 }),
        ),
        resource(
            "/convocatorias",
            "id_convocatoria",
            json!({ "nombre": "Fondecyt Iniciación", "tipo": tipo["id"], "institucion": inst["id"] }),
        ),
        resource("/tipo-convo", "id", json!({ "nombre": "Ventanilla abierta" })),
        resource("/inst-convo", "id", json!({ "nombre": "CORFO" })),
        resource(
            "/fondos",
            "id",
            json!({
                "nombre": "Fondo de Innovación",
                "inicio": "2025-03-01",
                "cierre": "2025-05-31",
                "financiamiento": "Hasta 80%",
                "plazo": "24 meses",
                "objetivo": "Escalamiento tecnológico",
                "trl": 4,
                "crl": 3,
                "team": 3,
                "brl": 2,
                "iprl": 2,
                "frl": 3,
                "tipo": 1,
                "req": "Empresa asociada",
            }),
        ),
        resource("/apoyos", "id_apoyo", json!({ "tipo": "Financiero", "detalle": "Cofinanciamiento" })),
        resource("/tags", "id_apoyo", json!({ "tag": "Equipamiento" })),
        resource("/tipo-apoyo", "id_tipo_apoyo", json!({ "tipo": "Pecuniario" })),
        resource("/tematicas", "id_tematica", json!({ "nombre": "Energía" })),
        resource("/estatus", "id_estatus", json!({ "tipo": "Postulado" })),
        resource("/cuestionarios", "id_cuestionario", json!({ "pregunta": "¿Tiene socios?" })),
        resource(
            "/respuestas-cuestionario",
            "id",
            json!({
                "nombre_investigador": id_academico,
                "escuela": id_unidad,
                "respuesta_1": "Sí",
                "respuesta_9": "No aplica",
            }),
        ),
        resource("/estudiantes", "id_estudiantes", json!({ "nombre": "Camila", "a_paterno": "Muñoz" })),
    ]
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn every_resource_round_trips_and_deletes_once(pool: PgPool) {
    for resource in seed_parents(&pool).await {
        let path = &resource.path;
        let created = create(&pool, path, resource.body.clone()).await;
        let id = created[resource.key]
            .as_i64()
            .unwrap_or_else(|| panic!("{path}: missing key {} in {created}", resource.key));
        for (field, value) in resource.body.as_object().unwrap() {
            assert_eq!(&created[field], value, "{path}: field {field}");
        }
        let item = format!("{path}/{id}");

        let app = common::build_test_app(pool.clone());
        let response = get(app, &item).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {item}");
        assert_eq!(body_json(response).await, created, "GET {item}");

        let app = common::build_test_app(pool.clone());
        let response = patch_json(app, &item, json!({})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "PATCH {item}");
        assert_eq!(body_json(response).await["error"], "No fields to update");

        let app = common::build_test_app(pool.clone());
        let response = delete(app, &item).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "DELETE {item}");

        let app = common::build_test_app(pool.clone());
        let response = delete(app, &item).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "second DELETE {item}");

        let app = common::build_test_app(pool.clone());
        let response = get(app, &item).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET deleted {item}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn every_resource_reports_missing_ids(pool: PgPool) {
    for resource in seed_parents(&pool).await {
        let item = format!("{}/987654", resource.path);

        let app = common::build_test_app(pool.clone());
        let response = get(app, &item).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {item}");
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");

        if resource.replace {
            let app = common::build_test_app(pool.clone());
            let response = put_json(app, &item, resource.body.clone()).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "PUT {item}");
        }

        let app = common::build_test_app(pool.clone());
        let response = delete(app, &item).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "DELETE {item}");
    }
}
