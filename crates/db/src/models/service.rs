//! Service catalog entity model and DTOs.

use clinica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A service row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub activo: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a catalog service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
}

/// Input for updating a catalog service. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateService {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<f64>,
    pub activo: Option<bool>,
}
