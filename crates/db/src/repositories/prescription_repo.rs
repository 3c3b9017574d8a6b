//! Repository for the `prescriptions` table.

use clinica_core::dto::prescription::{CreatePrescription, UpdatePrescription};
use clinica_core::types::DbId;
use sqlx::PgPool;

use crate::models::prescription::Prescription;

/// Column list for `prescriptions` queries.
const COLUMNS: &str = "id, patient_id, medicamento, dosis, indicaciones, fecha_emision, created_at";

/// Provides CRUD operations for prescriptions.
pub struct PrescriptionRepo;

impl PrescriptionRepo {
    /// Insert a new prescription, returning the created row.
    ///
    /// `fecha_emision` defaults to the current date when absent.
    pub async fn create(
        pool: &PgPool,
        patient_id: DbId,
        input: &CreatePrescription,
    ) -> Result<Prescription, sqlx::Error> {
        let query = format!(
            "INSERT INTO prescriptions (patient_id, medicamento, dosis, indicaciones, fecha_emision)
             VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prescription>(&query)
            .bind(patient_id)
            .bind(&input.medicamento)
            .bind(&input.dosis)
            .bind(&input.indicaciones)
            .bind(input.fecha_emision)
            .fetch_one(pool)
            .await
    }

    /// Find a prescription by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prescription>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prescriptions WHERE id = $1");
        sqlx::query_as::<_, Prescription>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a patient's prescriptions, most recently issued first.
    pub async fn list_for_patient(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Vec<Prescription>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prescriptions
             WHERE patient_id = $1
             ORDER BY fecha_emision DESC, id DESC"
        );
        sqlx::query_as::<_, Prescription>(&query)
            .bind(patient_id)
            .fetch_all(pool)
            .await
    }

    /// Update a prescription. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrescription,
    ) -> Result<Option<Prescription>, sqlx::Error> {
        let query = format!(
            "UPDATE prescriptions SET
                medicamento = COALESCE($2, medicamento),
                dosis = COALESCE($3, dosis),
                indicaciones = COALESCE($4, indicaciones),
                fecha_emision = COALESCE($5, fecha_emision)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prescription>(&query)
            .bind(id)
            .bind(&input.medicamento)
            .bind(&input.dosis)
            .bind(&input.indicaciones)
            .bind(input.fecha_emision)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a prescription. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prescriptions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
