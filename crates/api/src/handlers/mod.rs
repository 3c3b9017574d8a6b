//! Request handlers, one submodule per resource.
//!
//! Handlers parse the raw body, run the DTO factory from `clinica_core`
//! where the resource has one, invoke a single repository operation, and map
//! errors via [`AppError`](crate::error::AppError). Mutations append an
//! audit trail entry.

pub mod aesthetic_note;
pub mod appointment;
pub mod audit;
pub mod auth;
pub mod budget;
pub mod location;
pub mod notification;
pub mod patient;
pub mod prescription;
pub mod service;
pub mod treatment;

use clinica_core::types::DbId;
use clinica_db::repositories::AuditLogRepo;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Append an audit entry for a mutation.
///
/// Audit failures are logged and swallowed: the business operation already
/// committed and must not be reported as failed.
pub(crate) async fn record_audit(
    state: &AppState,
    auth: &AuthUser,
    accion: &str,
    entidad: &str,
    entidad_id: DbId,
) {
    if let Err(err) = AuditLogRepo::record(
        &state.pool,
        Some(auth.user_id),
        accion,
        entidad,
        Some(entidad_id),
        None,
    )
    .await
    {
        tracing::error!(error = %err, accion, entidad, entidad_id, "Failed to record audit entry");
    }
}
