//! Repository for the `appointments` table.

use chrono::NaiveDate;
use clinica_core::dto::appointment::{CreateAppointment, UpdateAppointment};
use clinica_core::types::DbId;
use sqlx::PgPool;

use crate::models::appointment::Appointment;

/// Column list for `appointments` queries.
const COLUMNS: &str = "id, patient_id, fecha, hora, motivo, estado, created_at, updated_at";

/// Provides CRUD operations for appointments.
///
/// Conflict detection against existing bookings is handled by an external
/// availability service, not here.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a new appointment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAppointment,
    ) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments (patient_id, fecha, hora, motivo, estado)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(input.patient_id)
            .bind(input.fecha)
            .bind(input.hora)
            .bind(&input.motivo)
            .bind(&input.estado)
            .fetch_one(pool)
            .await
    }

    /// Find an appointment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE id = $1");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a patient's appointments, soonest first.
    pub async fn list_for_patient(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments WHERE patient_id = $1 ORDER BY fecha, hora"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(patient_id)
            .fetch_all(pool)
            .await
    }

    /// List every appointment on a given day, ordered by time.
    pub async fn list_for_day(
        pool: &PgPool,
        fecha: NaiveDate,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE fecha = $1 ORDER BY hora");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(fecha)
            .fetch_all(pool)
            .await
    }

    /// Update an appointment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAppointment,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments SET
                fecha = COALESCE($2, fecha),
                hora = COALESCE($3, hora),
                motivo = COALESCE($4, motivo),
                estado = COALESCE($5, estado),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(input.fecha)
            .bind(input.hora)
            .bind(&input.motivo)
            .bind(&input.estado)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an appointment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
