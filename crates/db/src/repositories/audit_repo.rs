//! Repository for the `audit_log` table.

use clinica_core::types::DbId;
use sqlx::PgPool;

use crate::models::audit::AuditLog;

/// Column list for `audit_log` queries.
const COLUMNS: &str = "id, user_id, accion, entidad, entidad_id, detalle, created_at";

/// Append-only audit trail of who did what to which entity.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append an audit entry. Failures here must not abort the business
    /// operation; callers log and continue.
    pub async fn record(
        pool: &PgPool,
        user_id: Option<DbId>,
        accion: &str,
        entidad: &str,
        entidad_id: Option<DbId>,
        detalle: Option<&serde_json::Value>,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO audit_log (user_id, accion, entidad, entidad_id, detalle)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(user_id)
        .bind(accion)
        .bind(entidad)
        .bind(entidad_id)
        .bind(detalle)
        .fetch_one(pool)
        .await
    }

    /// List audit entries, newest first, optionally filtered by entity type
    /// and/or acting user.
    pub async fn list(
        pool: &PgPool,
        entidad: Option<&str>,
        user_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_log
             WHERE ($1::text IS NULL OR entidad = $1)
               AND ($2::bigint IS NULL OR user_id = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(entidad)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
