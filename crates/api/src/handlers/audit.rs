//! Handlers for the `/audit` resource (read-only trail).

use axum::extract::{Query, State};
use axum::Json;
use clinica_core::types::DbId;
use clinica_db::models::audit::AuditLog;
use clinica_db::repositories::AuditLogRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /audit`.
#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    /// Filter by entity type (e.g. `patient`, `budget`).
    pub entidad: Option<String>,
    /// Filter by acting user.
    pub user_id: Option<DbId>,
    /// Maximum number of results. Defaults to 50, capped at 200.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Maximum page size for audit listing.
const MAX_LIMIT: i64 = 200;

/// Default page size for audit listing.
const DEFAULT_LIMIT: i64 = 50;

/// GET /api/v1/audit
///
/// List audit entries, newest first, with optional filters.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<AuditQuery>,
) -> AppResult<Json<Vec<AuditLog>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let entries = AuditLogRepo::list(
        &state.pool,
        params.entidad.as_deref(),
        params.user_id,
        limit,
        offset,
    )
    .await?;

    Ok(Json(entries))
}
