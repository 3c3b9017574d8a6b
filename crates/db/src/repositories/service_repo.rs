//! Repository for the `services` catalog table.

use clinica_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service, UpdateService};

/// Column list for `services` queries.
const COLUMNS: &str = "id, nombre, descripcion, precio, activo, created_at, updated_at";

/// Provides CRUD operations for the service catalog.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (nombre, descripcion, precio)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.precio)
            .fetch_one(pool)
            .await
    }

    /// Find a service by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List services alphabetically. Inactive services are included only
    /// when `include_inactive` is `true`.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Service>, sqlx::Error> {
        let filter = if include_inactive { "" } else { "WHERE activo = true" };
        let query = format!("SELECT {COLUMNS} FROM services {filter} ORDER BY nombre");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Update a service. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                nombre = COALESCE($2, nombre),
                descripcion = COALESCE($3, descripcion),
                precio = COALESCE($4, precio),
                activo = COALESCE($5, activo),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.precio)
            .bind(input.activo)
            .fetch_optional(pool)
            .await
    }

    /// Deactivate a service (it stays referenced by historical budgets).
    /// Returns `true` if a row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE services SET activo = false, updated_at = NOW()
             WHERE id = $1 AND activo = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
