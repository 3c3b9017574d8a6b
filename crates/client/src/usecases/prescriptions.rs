//! Prescription use-cases.

use clinica_core::dto::prescription::{CreatePrescription, UpdatePrescription};

use crate::adapter::HttpAdapter;
use crate::error::ClientError;
use crate::types::Prescription;

/// Issue a prescription for a patient.
pub async fn create_prescription(
    adapter: &impl HttpAdapter,
    patient_id: i64,
    prescription: &CreatePrescription,
) -> Result<Prescription, ClientError> {
    adapter
        .post(
            &format!("/api/v1/patients/{patient_id}/prescriptions"),
            prescription,
        )
        .await
        .map_err(|e| ClientError::operation("No fue posible emitir la receta", e))
}

/// Fetch a patient's prescriptions.
pub async fn list_prescriptions_for_patient(
    adapter: &impl HttpAdapter,
    patient_id: i64,
) -> Result<Vec<Prescription>, ClientError> {
    adapter
        .get(&format!("/api/v1/patients/{patient_id}/prescriptions"))
        .await
        .map_err(|e| ClientError::operation("No fue posible obtener las recetas del paciente", e))
}

/// Apply a validated partial update to a prescription.
pub async fn update_prescription(
    adapter: &impl HttpAdapter,
    id: i64,
    update: &UpdatePrescription,
) -> Result<Prescription, ClientError> {
    adapter
        .put(&format!("/api/v1/prescriptions/{id}"), update)
        .await
        .map_err(|e| ClientError::operation("No fue posible actualizar la receta", e))
}

/// Remove a prescription.
pub async fn delete_prescription(adapter: &impl HttpAdapter, id: i64) -> Result<(), ClientError> {
    adapter
        .delete(&format!("/api/v1/prescriptions/{id}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible eliminar la receta", e))
}
