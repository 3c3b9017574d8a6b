//! Repository for the `patients` table.

use clinica_core::dto::patient::{CreatePatient, UpdatePatient};
use clinica_core::types::DbId;
use sqlx::PgPool;

use crate::models::patient::Patient;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, rut, nombres, apellidos, fecha_nacimiento, email, telefono, \
                       direccion, prevision, doctor_id, created_at, updated_at";

/// Provides CRUD operations for patients.
pub struct PatientRepo;

impl PatientRepo {
    /// Insert a new patient, returning the created row.
    ///
    /// A duplicate RUT violates `uq_patients_rut` and surfaces as a
    /// database error the API layer maps to 409.
    pub async fn create(pool: &PgPool, input: &CreatePatient) -> Result<Patient, sqlx::Error> {
        let query = format!(
            "INSERT INTO patients (rut, nombres, apellidos, fecha_nacimiento, email,
                                   telefono, direccion, prevision)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(&input.rut)
            .bind(&input.nombres)
            .bind(&input.apellidos)
            .bind(input.fecha_nacimiento)
            .bind(&input.email)
            .bind(&input.telefono)
            .bind(&input.direccion)
            .bind(&input.prevision)
            .fetch_one(pool)
            .await
    }

    /// Find a patient by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a patient by normalized RUT. Excludes soft-deleted rows.
    pub async fn find_by_rut(pool: &PgPool, rut: &str) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients WHERE rut = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Patient>(&query)
            .bind(rut)
            .fetch_optional(pool)
            .await
    }

    /// List patients, most recently created first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Patient>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM patients WHERE deleted_at IS NULL
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a patient. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePatient,
    ) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!(
            "UPDATE patients SET
                rut = COALESCE($2, rut),
                nombres = COALESCE($3, nombres),
                apellidos = COALESCE($4, apellidos),
                fecha_nacimiento = COALESCE($5, fecha_nacimiento),
                email = COALESCE($6, email),
                telefono = COALESCE($7, telefono),
                direccion = COALESCE($8, direccion),
                prevision = COALESCE($9, prevision),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .bind(&input.rut)
            .bind(&input.nombres)
            .bind(&input.apellidos)
            .bind(input.fecha_nacimiento)
            .bind(&input.email)
            .bind(&input.telefono)
            .bind(&input.direccion)
            .bind(&input.prevision)
            .fetch_optional(pool)
            .await
    }

    /// Assign or clear the treating doctor.
    pub async fn set_doctor(
        pool: &PgPool,
        id: DbId,
        doctor_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE patients SET doctor_id = $2, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(doctor_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a patient. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE patients SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted patient. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE patients SET deleted_at = NULL WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
