//! Appointment entity model.

use chrono::{NaiveDate, NaiveTime};
use clinica_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An appointment row from the `appointments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub patient_id: DbId,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub motivo: Option<String>,
    pub estado: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
