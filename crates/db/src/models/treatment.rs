//! Treatment (control session) entity model.

use chrono::{NaiveDate, NaiveTime};
use clinica_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A treatment row from the `treatments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Treatment {
    pub id: DbId,
    pub patient_id: DbId,
    pub fecha_control: NaiveDate,
    pub hora_control: NaiveTime,
    pub nombre_servicio: String,
    pub producto: Option<String>,
    pub lote_producto: Option<String>,
    pub dosis: Option<String>,
    pub recomendaciones: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
