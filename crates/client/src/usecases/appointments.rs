//! Appointment use-cases.

use chrono::NaiveDate;
use clinica_core::dto::appointment::{CreateAppointment, UpdateAppointment};

use crate::adapter::HttpAdapter;
use crate::error::ClientError;
use crate::types::Appointment;

/// Fetch the agenda for one day.
pub async fn list_appointments_for_day(
    adapter: &impl HttpAdapter,
    fecha: NaiveDate,
) -> Result<Vec<Appointment>, ClientError> {
    adapter
        .get(&format!("/api/v1/appointments?fecha={fecha}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible obtener la agenda", e))
}

/// Fetch a patient's appointments.
pub async fn list_appointments_for_patient(
    adapter: &impl HttpAdapter,
    patient_id: i64,
) -> Result<Vec<Appointment>, ClientError> {
    adapter
        .get(&format!("/api/v1/patients/{patient_id}/appointments"))
        .await
        .map_err(|e| ClientError::operation("No fue posible obtener las citas del paciente", e))
}

/// Book an appointment from a validated payload.
pub async fn create_appointment(
    adapter: &impl HttpAdapter,
    appointment: &CreateAppointment,
) -> Result<Appointment, ClientError> {
    adapter
        .post("/api/v1/appointments", appointment)
        .await
        .map_err(|e| ClientError::operation("No fue posible agendar la cita", e))
}

/// Apply a validated partial update (including state changes).
pub async fn update_appointment(
    adapter: &impl HttpAdapter,
    id: i64,
    update: &UpdateAppointment,
) -> Result<Appointment, ClientError> {
    adapter
        .put(&format!("/api/v1/appointments/{id}"), update)
        .await
        .map_err(|e| ClientError::operation("No fue posible actualizar la cita", e))
}

/// Remove an appointment.
pub async fn delete_appointment(adapter: &impl HttpAdapter, id: i64) -> Result<(), ClientError> {
    adapter
        .delete(&format!("/api/v1/appointments/{id}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible eliminar la cita", e))
}

/// Ask the availability service whether a slot is bookable.
///
/// Conflict detection against existing bookings and recurring schedule
/// blocks lives in a separate service; its JSON payload is returned
/// untouched for the caller to interpret.
pub async fn check_availability(
    adapter: &impl HttpAdapter,
    fecha: NaiveDate,
    hora: &str,
) -> Result<serde_json::Value, ClientError> {
    adapter
        .get(&format!("/api/v1/availability?fecha={fecha}&hora={hora}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible verificar la disponibilidad", e))
}
