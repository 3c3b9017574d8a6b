//! HTTP-level integration tests for the `/patients` resource and its
//! nested clinical records.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete_auth, get_auth, post_json_auth, request_json_auth};
use sqlx::PgPool;

fn valid_patient_body() -> serde_json::Value {
    serde_json::json!({
        "rut": "17.539.138-K",
        "nombres": "María José",
        "apellidos": "Fuentes Rojas",
        "fecha_nacimiento": "1990-05-20",
        "email": "maria@correo.cl",
        "prevision": "Fonasa"
    })
}

/// Create a patient via the API, returning its JSON representation.
async fn create_patient(pool: &PgPool, token: &str) -> serde_json::Value {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/patients",
        token,
        valid_patient_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Creation normalizes the RUT and strips empty optionals.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_patient(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "doc", "doctor").await;
    let token = common::token_for(&user);

    let patient = create_patient(&pool, &token).await;
    assert_eq!(patient["rut"], "17539138-k");
    assert_eq!(patient["nombres"], "María José");
    assert!(patient["id"].is_number());
}

/// A future birth date is rejected with the exact Spanish message.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_patient_future_birth_date(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "doc", "doctor").await;
    let token = common::token_for(&user);

    let mut body = valid_patient_body();
    body["fecha_nacimiento"] = serde_json::json!("2099-01-01");

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/patients",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"][0], "La fecha de nacimiento no puede ser futura");
}

/// Missing fields are all reported at once.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_patient_reports_every_violation(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "doc", "doctor").await;
    let token = common::token_for(&user);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/patients",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let errors = json["errors"].as_array().expect("errors must be a list");
    assert_eq!(errors.len(), 4);
    assert!(errors.contains(&serde_json::json!("El RUT es obligatorio")));
    assert!(errors.contains(&serde_json::json!("La fecha de nacimiento es obligatoria")));
}

/// A duplicate RUT maps to 409 via the unique constraint.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_rut_conflict(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "doc", "doctor").await;
    let token = common::token_for(&user);

    create_patient(&pool, &token).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/patients",
        &token,
        valid_patient_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// Update with a bad email -> 400; empty update -> 200 no-op.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_patient(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "doc", "doctor").await;
    let token = common::token_for(&user);
    let patient = create_patient(&pool, &token).await;
    let id = patient["id"].as_i64().unwrap();

    let response = request_json_auth(
        common::build_test_app(pool.clone()),
        Method::PUT,
        &format!("/api/v1/patients/{id}"),
        &token,
        serde_json::json!({ "email": "bad-email" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0], "Email no es válido");

    // The no-op update is legal and changes nothing.
    let response = request_json_auth(
        common::build_test_app(pool),
        Method::PUT,
        &format!("/api/v1/patients/{id}"),
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["email"], patient["email"]);
}

/// Soft delete hides the patient; restore brings it back.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_and_restore(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "doc", "doctor").await;
    let token = common::token_for(&user);
    let patient = create_patient(&pool, &token).await;
    let id = patient["id"].as_i64().unwrap();

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/patients/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/patients/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/patients/{id}/restore"),
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/patients/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Mutations leave audit trail rows behind.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_mutations_are_audited(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "doc", "doctor").await;
    let token = common::token_for(&user);
    let patient = create_patient(&pool, &token).await;
    let id = patient["id"].as_i64().unwrap();

    delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/patients/{id}"),
        &token,
    )
    .await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/audit?entidad=patient",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let entries = body_json(response).await;
    let entries = entries.as_array().expect("audit list must be an array");
    assert_eq!(entries.len(), 2);
    // Newest first.
    assert_eq!(entries[0]["accion"], "delete");
    assert_eq!(entries[1]["accion"], "create");
    assert_eq!(entries[0]["user_id"], user.id);
}

/// Nested treatments: create under the patient, list back.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_nested_treatments(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "doc", "doctor").await;
    let token = common::token_for(&user);
    let patient = create_patient(&pool, &token).await;
    let id = patient["id"].as_i64().unwrap();

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/patients/{id}/treatments"),
        &token,
        serde_json::json!({
            "fecha_control": "2024-03-15",
            "hora_control": "10:30",
            "nombre_servicio": "Limpieza profunda"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/patients/{id}/treatments"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["nombre_servicio"], "Limpieza profunda");
}

/// Creating a clinical record under a missing patient returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_nested_create_missing_patient(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "doc", "doctor").await;
    let token = common::token_for(&user);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/patients/9999/prescriptions",
        &token,
        serde_json::json!({ "medicamento": "Ibuprofeno", "dosis": "400mg" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
