//! Aesthetic note entity model and DTOs.
//!
//! Free-form clinical annotations for aesthetic procedures, attached to a
//! patient record.

use clinica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An aesthetic note row from the `aesthetic_notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AestheticNote {
    pub id: DbId,
    pub patient_id: DbId,
    pub titulo: String,
    pub contenido: String,
    /// Treated zone (e.g. "frente", "labios"), when recorded.
    pub zona: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating an aesthetic note.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAestheticNote {
    pub titulo: String,
    pub contenido: String,
    pub zona: Option<String>,
}

/// Input for updating an aesthetic note. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAestheticNote {
    pub titulo: Option<String>,
    pub contenido: Option<String>,
    pub zona: Option<String>,
}
