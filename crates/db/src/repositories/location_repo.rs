//! Repository for the `locations` table.

use clinica_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location, UpdateLocation};

/// Column list for `locations` queries.
const COLUMNS: &str = "id, nombre, direccion, telefono, activo, created_at, updated_at";

/// Provides CRUD operations for practice locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (nombre, direccion, telefono)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.nombre)
            .bind(&input.direccion)
            .bind(&input.telefono)
            .fetch_one(pool)
            .await
    }

    /// Find a location by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List locations alphabetically. Inactive locations are included only
    /// when `include_inactive` is `true`.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Location>, sqlx::Error> {
        let filter = if include_inactive { "" } else { "WHERE activo = true" };
        let query = format!("SELECT {COLUMNS} FROM locations {filter} ORDER BY nombre");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// Update a location. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLocation,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!(
            "UPDATE locations SET
                nombre = COALESCE($2, nombre),
                direccion = COALESCE($3, direccion),
                telefono = COALESCE($4, telefono),
                activo = COALESCE($5, activo),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.direccion)
            .bind(&input.telefono)
            .bind(input.activo)
            .fetch_optional(pool)
            .await
    }

    /// Deactivate a location. Returns `true` if a row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE locations SET activo = false, updated_at = NOW()
             WHERE id = $1 AND activo = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
