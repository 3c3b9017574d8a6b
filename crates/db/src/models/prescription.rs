//! Prescription entity model.

use chrono::NaiveDate;
use clinica_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A prescription row from the `prescriptions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prescription {
    pub id: DbId,
    pub patient_id: DbId,
    pub medicamento: String,
    pub dosis: String,
    pub indicaciones: Option<String>,
    pub fecha_emision: NaiveDate,
    pub created_at: Timestamp,
}
