//! Location (branch office) entity model and DTOs.

use clinica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A location row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub nombre: String,
    pub direccion: String,
    pub telefono: Option<String>,
    pub activo: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a location.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub nombre: String,
    pub direccion: String,
    pub telefono: Option<String>,
}

/// Input for updating a location. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLocation {
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub activo: Option<bool>,
}
