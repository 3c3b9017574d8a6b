//! Integration tests for the budget save/read/status flow.

use clinica_core::dto::budget::{BudgetItemInput, SaveBudgetInput, UpdateBudgetStatusInput};
use clinica_core::dto::patient::CreatePatientInput;
use clinica_db::repositories::{BudgetRepo, PatientRepo};
use sqlx::PgPool;

async fn create_patient(pool: &PgPool) -> i64 {
    let dto = CreatePatientInput {
        rut: Some("17539138-k".into()),
        nombres: Some("Carla".into()),
        apellidos: Some("Mena".into()),
        fecha_nacimiento: Some("1985-11-02".into()),
        ..Default::default()
    }
    .validate()
    .expect("test patient should validate");
    PatientRepo::create(pool, &dto)
        .await
        .expect("patient creation should succeed")
        .id
}

fn budget_input(patient_id: i64) -> SaveBudgetInput {
    SaveBudgetInput {
        patient_id: Some(patient_id),
        budget_type: Some("odontologico".into()),
        items: Some(vec![
            BudgetItemInput {
                accion: Some("Limpieza".into()),
                valor: Some(serde_json::json!(25000)),
                orden: None,
            },
            BudgetItemInput {
                accion: Some("Destartraje".into()),
                valor: Some(serde_json::json!("45000")),
                orden: None,
            },
        ]),
    }
}

#[sqlx::test]
async fn save_budget_with_items(pool: PgPool) {
    let patient_id = create_patient(&pool).await;

    let dto = budget_input(patient_id).validate().expect("budget should validate");
    let saved = BudgetRepo::save(&pool, &dto).await.expect("save should succeed");

    assert_eq!(saved.budget.estado, "borrador");
    assert_eq!(saved.items.len(), 2);
    assert_eq!(saved.items[0].orden, 0);
    assert_eq!(saved.items[1].valor, 45000.0);

    let fetched = BudgetRepo::find_with_items(&pool, saved.budget.id)
        .await
        .expect("lookup should succeed")
        .expect("budget should exist");
    assert_eq!(fetched.items.len(), 2);
    // Items come back in orden order.
    assert_eq!(fetched.items[0].accion, "Limpieza");
}

#[sqlx::test]
async fn status_transition_and_listing(pool: PgPool) {
    let patient_id = create_patient(&pool).await;
    let dto = budget_input(patient_id).validate().expect("budget should validate");
    let saved = BudgetRepo::save(&pool, &dto).await.expect("save should succeed");

    let estado = UpdateBudgetStatusInput {
        estado: Some("aprobado".into()),
    }
    .validate()
    .expect("status should validate");

    let updated = BudgetRepo::update_status(&pool, saved.budget.id, &estado.estado)
        .await
        .expect("status update should succeed")
        .expect("budget should exist");
    assert_eq!(updated.estado, "aprobado");

    let listed = BudgetRepo::list_for_patient(&pool, patient_id)
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 1);
}

#[sqlx::test]
async fn soft_deleted_budget_hidden(pool: PgPool) {
    let patient_id = create_patient(&pool).await;
    let dto = budget_input(patient_id).validate().expect("budget should validate");
    let saved = BudgetRepo::save(&pool, &dto).await.expect("save should succeed");

    assert!(BudgetRepo::soft_delete(&pool, saved.budget.id)
        .await
        .expect("soft delete should succeed"));

    assert!(BudgetRepo::find_with_items(&pool, saved.budget.id)
        .await
        .expect("lookup should succeed")
        .is_none());

    // Second soft delete is a no-op.
    assert!(!BudgetRepo::soft_delete(&pool, saved.budget.id)
        .await
        .expect("soft delete should succeed"));
}
