//! Response shapes returned by the API.
//!
//! These mirror the server's entity serialization without pulling the
//! database layer into the client.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

/// A patient record.
#[derive(Debug, Clone, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub rut: String,
    pub nombres: String,
    pub apellidos: String,
    pub fecha_nacimiento: NaiveDate,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub prevision: Option<String>,
    pub doctor_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An appointment.
#[derive(Debug, Clone, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub motivo: Option<String>,
    pub estado: String,
}

/// A budget header.
#[derive(Debug, Clone, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub patient_id: i64,
    pub tipo: String,
    pub estado: String,
}

/// A budget line item.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetItem {
    pub id: i64,
    pub accion: String,
    pub valor: f64,
    pub orden: i32,
}

/// A budget with its ordered items (flattened header + `items`).
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetWithItems {
    #[serde(flatten)]
    pub budget: Budget,
    pub items: Vec<BudgetItem>,
}

/// A treatment record.
#[derive(Debug, Clone, Deserialize)]
pub struct Treatment {
    pub id: i64,
    pub patient_id: i64,
    pub fecha_control: NaiveDate,
    pub hora_control: NaiveTime,
    pub nombre_servicio: String,
    pub producto: Option<String>,
    pub lote_producto: Option<String>,
    pub dosis: Option<String>,
    pub recomendaciones: Option<String>,
}

/// A prescription.
#[derive(Debug, Clone, Deserialize)]
pub struct Prescription {
    pub id: i64,
    pub patient_id: i64,
    pub medicamento: String,
    pub dosis: String,
    pub indicaciones: Option<String>,
    pub fecha_emision: NaiveDate,
}

/// An in-app notification.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub tipo: String,
    pub mensaje: String,
    pub is_read: bool,
}

/// The `{ "data": ... }` envelope used by notification endpoints.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Tokens and user info returned by login/refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}
