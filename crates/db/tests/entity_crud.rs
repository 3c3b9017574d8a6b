//! Integration tests for repository CRUD against a real database.
//!
//! Each test gets a fresh schema via `#[sqlx::test]`, which applies the
//! migrations in `crates/db/migrations`.

use clinica_core::dto::appointment::CreateAppointmentInput;
use clinica_core::dto::patient::{CreatePatientInput, UpdatePatientInput};
use clinica_core::dto::prescription::CreatePrescriptionInput;
use clinica_core::dto::treatment::CreateTreatmentInput;
use clinica_db::models::patient::Patient;
use clinica_db::models::service::{CreateService, UpdateService};
use clinica_db::repositories::{
    AppointmentRepo, PatientRepo, PrescriptionRepo, ServiceRepo, TreatmentRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_patient(pool: &PgPool, rut: &str) -> Patient {
    let input = CreatePatientInput {
        rut: Some(rut.to_string()),
        nombres: Some("Carla".into()),
        apellidos: Some("Mena Soto".into()),
        fecha_nacimiento: Some("1985-11-02".into()),
        email: Some("carla@test.cl".into()),
        ..Default::default()
    };
    let dto = input.validate().expect("test patient should validate");
    PatientRepo::create(pool, &dto)
        .await
        .expect("patient creation should succeed")
}

// ---------------------------------------------------------------------------
// Patients
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn patient_create_and_find(pool: PgPool) {
    let patient = create_patient(&pool, "17539138-k").await;
    assert_eq!(patient.rut, "17539138-k");
    assert_eq!(patient.nombres, "Carla");

    let found = PatientRepo::find_by_id(&pool, patient.id)
        .await
        .expect("lookup should succeed")
        .expect("patient should exist");
    assert_eq!(found.id, patient.id);

    let by_rut = PatientRepo::find_by_rut(&pool, "17539138-k")
        .await
        .expect("lookup should succeed");
    assert!(by_rut.is_some());
}

#[sqlx::test]
async fn patient_duplicate_rut_rejected(pool: PgPool) {
    create_patient(&pool, "17539138-k").await;

    let input = CreatePatientInput {
        rut: Some("17539138-k".into()),
        nombres: Some("Otra".into()),
        apellidos: Some("Persona".into()),
        fecha_nacimiento: Some("1990-01-01".into()),
        ..Default::default()
    };
    let dto = input.validate().expect("input should validate");
    let err = PatientRepo::create(&pool, &dto)
        .await
        .expect_err("duplicate RUT must violate uq_patients_rut");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_patients_rut"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn patient_partial_update(pool: PgPool) {
    let patient = create_patient(&pool, "12345678-5").await;

    let update = UpdatePatientInput {
        telefono: Some("+56 9 5555 1234".into()),
        ..Default::default()
    }
    .validate()
    .expect("update should validate");

    let updated = PatientRepo::update(&pool, patient.id, &update)
        .await
        .expect("update should succeed")
        .expect("patient should exist");

    // Only the provided field changed.
    assert_eq!(updated.telefono.as_deref(), Some("+56 9 5555 1234"));
    assert_eq!(updated.nombres, patient.nombres);
    assert_eq!(updated.email, patient.email);
}

#[sqlx::test]
async fn patient_list_newest_first(pool: PgPool) {
    let first = create_patient(&pool, "17539138-k").await;
    let second = create_patient(&pool, "12345678-5").await;

    let listed = PatientRepo::list(&pool, 50, 0)
        .await
        .expect("list should succeed");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[sqlx::test]
async fn patient_soft_delete_and_restore(pool: PgPool) {
    let patient = create_patient(&pool, "17539138-k").await;

    assert!(PatientRepo::soft_delete(&pool, patient.id)
        .await
        .expect("soft delete should succeed"));
    assert!(PatientRepo::find_by_id(&pool, patient.id)
        .await
        .expect("lookup should succeed")
        .is_none());

    // Idempotence: second soft delete reports nothing to do.
    assert!(!PatientRepo::soft_delete(&pool, patient.id)
        .await
        .expect("soft delete should succeed"));

    assert!(PatientRepo::restore(&pool, patient.id)
        .await
        .expect("restore should succeed"));
    assert!(PatientRepo::find_by_id(&pool, patient.id)
        .await
        .expect("lookup should succeed")
        .is_some());
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn appointment_crud(pool: PgPool) {
    let patient = create_patient(&pool, "17539138-k").await;

    let input = CreateAppointmentInput {
        patient_id: Some(patient.id),
        fecha: Some("2099-04-01".into()),
        hora: Some("15:30".into()),
        motivo: Some("Control anual".into()),
        estado: None,
    };
    let dto = input.validate().expect("appointment should validate");
    let appointment = AppointmentRepo::create(&pool, &dto)
        .await
        .expect("creation should succeed");
    assert_eq!(appointment.estado, "pendiente");

    let day = AppointmentRepo::list_for_day(&pool, appointment.fecha)
        .await
        .expect("day listing should succeed");
    assert_eq!(day.len(), 1);

    let removed = AppointmentRepo::delete(&pool, appointment.id)
        .await
        .expect("delete should succeed");
    assert!(removed);
    assert!(AppointmentRepo::find_by_id(&pool, appointment.id)
        .await
        .expect("lookup should succeed")
        .is_none());
}

// ---------------------------------------------------------------------------
// Treatments and prescriptions
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn treatment_listed_for_patient(pool: PgPool) {
    let patient = create_patient(&pool, "17539138-k").await;

    let dto = CreateTreatmentInput {
        fecha_control: Some("2024-03-15".into()),
        hora_control: Some("10:30".into()),
        nombre_servicio: Some("Limpieza profunda".into()),
        ..Default::default()
    }
    .validate()
    .expect("treatment should validate");

    let treatment = TreatmentRepo::create(&pool, patient.id, &dto)
        .await
        .expect("creation should succeed");
    assert_eq!(treatment.patient_id, patient.id);

    let listed = TreatmentRepo::list_for_patient(&pool, patient.id)
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].nombre_servicio, "Limpieza profunda");
}

#[sqlx::test]
async fn prescription_defaults_emission_date(pool: PgPool) {
    let patient = create_patient(&pool, "17539138-k").await;

    let dto = CreatePrescriptionInput {
        medicamento: Some("Amoxicilina 500mg".into()),
        dosis: Some("1 cada 8 horas".into()),
        ..Default::default()
    }
    .validate()
    .expect("prescription should validate");

    let prescription = PrescriptionRepo::create(&pool, patient.id, &dto)
        .await
        .expect("creation should succeed");
    assert_eq!(prescription.fecha_emision, chrono::Utc::now().date_naive());
}

// ---------------------------------------------------------------------------
// Service catalog
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn service_deactivation_hides_from_default_listing(pool: PgPool) {
    let service = ServiceRepo::create(
        &pool,
        &CreateService {
            nombre: "Blanqueamiento".into(),
            descripcion: None,
            precio: 120000.0,
        },
    )
    .await
    .expect("creation should succeed");

    let updated = ServiceRepo::update(
        &pool,
        service.id,
        &UpdateService {
            precio: Some(135000.0),
            ..Default::default()
        },
    )
    .await
    .expect("update should succeed")
    .expect("service should exist");
    assert_eq!(updated.precio, 135000.0);

    assert!(ServiceRepo::deactivate(&pool, service.id)
        .await
        .expect("deactivation should succeed"));

    let active = ServiceRepo::list(&pool, false).await.expect("list should succeed");
    assert!(active.is_empty());

    let all = ServiceRepo::list(&pool, true).await.expect("list should succeed");
    assert_eq!(all.len(), 1);
    assert!(!all[0].activo);
}
