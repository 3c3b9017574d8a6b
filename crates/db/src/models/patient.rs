//! Patient entity model.
//!
//! Insert/update inputs are the validated DTOs
//! [`clinica_core::dto::patient::CreatePatient`] and
//! [`clinica_core::dto::patient::UpdatePatient`].

use chrono::NaiveDate;
use clinica_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A patient row from the `patients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Patient {
    pub id: DbId,
    pub rut: String,
    pub nombres: String,
    pub apellidos: String,
    pub fecha_nacimiento: NaiveDate,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub prevision: Option<String>,
    /// Treating doctor, when assigned.
    pub doctor_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
