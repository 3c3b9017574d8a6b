//! Repository for the `treatments` table.

use clinica_core::dto::treatment::{CreateTreatment, UpdateTreatment};
use clinica_core::types::DbId;
use sqlx::PgPool;

use crate::models::treatment::Treatment;

/// Column list for `treatments` queries.
const COLUMNS: &str = "id, patient_id, fecha_control, hora_control, nombre_servicio, \
                       producto, lote_producto, dosis, recomendaciones, created_at, updated_at";

/// Provides CRUD operations for treatments.
pub struct TreatmentRepo;

impl TreatmentRepo {
    /// Insert a new treatment for a patient, returning the created row.
    pub async fn create(
        pool: &PgPool,
        patient_id: DbId,
        input: &CreateTreatment,
    ) -> Result<Treatment, sqlx::Error> {
        let query = format!(
            "INSERT INTO treatments (patient_id, fecha_control, hora_control, nombre_servicio,
                                     producto, lote_producto, dosis, recomendaciones)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Treatment>(&query)
            .bind(patient_id)
            .bind(input.fecha_control)
            .bind(input.hora_control)
            .bind(&input.nombre_servicio)
            .bind(&input.producto)
            .bind(&input.lote_producto)
            .bind(&input.dosis)
            .bind(&input.recomendaciones)
            .fetch_one(pool)
            .await
    }

    /// Find a treatment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Treatment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM treatments WHERE id = $1");
        sqlx::query_as::<_, Treatment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a patient's treatments, most recent control first.
    pub async fn list_for_patient(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Vec<Treatment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM treatments
             WHERE patient_id = $1
             ORDER BY fecha_control DESC, hora_control DESC"
        );
        sqlx::query_as::<_, Treatment>(&query)
            .bind(patient_id)
            .fetch_all(pool)
            .await
    }

    /// Update a treatment. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTreatment,
    ) -> Result<Option<Treatment>, sqlx::Error> {
        let query = format!(
            "UPDATE treatments SET
                fecha_control = COALESCE($2, fecha_control),
                hora_control = COALESCE($3, hora_control),
                nombre_servicio = COALESCE($4, nombre_servicio),
                producto = COALESCE($5, producto),
                lote_producto = COALESCE($6, lote_producto),
                dosis = COALESCE($7, dosis),
                recomendaciones = COALESCE($8, recomendaciones),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Treatment>(&query)
            .bind(id)
            .bind(input.fecha_control)
            .bind(input.hora_control)
            .bind(&input.nombre_servicio)
            .bind(&input.producto)
            .bind(&input.lote_producto)
            .bind(&input.dosis)
            .bind(&input.recomendaciones)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a treatment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM treatments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
