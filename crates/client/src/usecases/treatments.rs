//! Treatment use-cases.

use clinica_core::dto::treatment::{CreateTreatment, UpdateTreatment};

use crate::adapter::HttpAdapter;
use crate::error::ClientError;
use crate::types::Treatment;

/// Record a treatment for a patient.
pub async fn create_treatment(
    adapter: &impl HttpAdapter,
    patient_id: i64,
    treatment: &CreateTreatment,
) -> Result<Treatment, ClientError> {
    adapter
        .post(&format!("/api/v1/patients/{patient_id}/treatments"), treatment)
        .await
        .map_err(|e| ClientError::operation("No fue posible registrar el tratamiento", e))
}

/// Fetch a patient's treatment history.
pub async fn list_treatments_for_patient(
    adapter: &impl HttpAdapter,
    patient_id: i64,
) -> Result<Vec<Treatment>, ClientError> {
    adapter
        .get(&format!("/api/v1/patients/{patient_id}/treatments"))
        .await
        .map_err(|e| {
            ClientError::operation("No fue posible obtener los tratamientos del paciente", e)
        })
}

/// Apply a validated partial update to a treatment.
pub async fn update_treatment(
    adapter: &impl HttpAdapter,
    id: i64,
    update: &UpdateTreatment,
) -> Result<Treatment, ClientError> {
    adapter
        .put(&format!("/api/v1/treatments/{id}"), update)
        .await
        .map_err(|e| ClientError::operation("No fue posible actualizar el tratamiento", e))
}

/// Remove a treatment.
pub async fn delete_treatment(adapter: &impl HttpAdapter, id: i64) -> Result<(), ClientError> {
    adapter
        .delete(&format!("/api/v1/treatments/{id}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible eliminar el tratamiento", e))
}
