//! Audit log entity model.

use clinica_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `audit_log` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub accion: String,
    pub entidad: String,
    pub entidad_id: Option<DbId>,
    pub detalle: Option<serde_json::Value>,
    pub created_at: Timestamp,
}
