//! Budget use-cases.

use clinica_core::dto::budget::{SaveBudget, UpdateBudgetStatus};

use crate::adapter::HttpAdapter;
use crate::error::ClientError;
use crate::types::{Budget, BudgetWithItems};

/// Save a budget with its items.
pub async fn save_budget(
    adapter: &impl HttpAdapter,
    budget: &SaveBudget,
) -> Result<BudgetWithItems, ClientError> {
    adapter
        .post("/api/v1/budgets", budget)
        .await
        .map_err(|e| ClientError::operation("No fue posible guardar el presupuesto", e))
}

/// Fetch a budget with its items.
pub async fn get_budget(
    adapter: &impl HttpAdapter,
    id: i64,
) -> Result<BudgetWithItems, ClientError> {
    adapter
        .get(&format!("/api/v1/budgets/{id}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible obtener el presupuesto", e))
}

/// Fetch a patient's budget headers.
pub async fn list_budgets_for_patient(
    adapter: &impl HttpAdapter,
    patient_id: i64,
) -> Result<Vec<Budget>, ClientError> {
    adapter
        .get(&format!("/api/v1/patients/{patient_id}/budgets"))
        .await
        .map_err(|e| {
            ClientError::operation("No fue posible obtener los presupuestos del paciente", e)
        })
}

/// Change a budget's state.
pub async fn update_budget_status(
    adapter: &impl HttpAdapter,
    id: i64,
    status: &UpdateBudgetStatus,
) -> Result<Budget, ClientError> {
    adapter
        .put(&format!("/api/v1/budgets/{id}/status"), status)
        .await
        .map_err(|e| ClientError::operation("No fue posible actualizar el estado del presupuesto", e))
}

/// Soft-delete a budget.
pub async fn delete_budget(adapter: &impl HttpAdapter, id: i64) -> Result<(), ClientError> {
    adapter
        .delete(&format!("/api/v1/budgets/{id}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible eliminar el presupuesto", e))
}
