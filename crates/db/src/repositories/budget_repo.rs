//! Repository for the `budgets` and `budget_items` tables.

use clinica_core::dto::budget::SaveBudget;
use clinica_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget::{Budget, BudgetItem, BudgetWithItems};

/// Column list for `budgets` queries.
const COLUMNS: &str = "id, patient_id, tipo, estado, created_at, updated_at";

/// Column list for `budget_items` queries.
const ITEM_COLUMNS: &str = "id, budget_id, accion, valor, orden";

/// Provides budget persistence. The header and its items are written in one
/// transaction so a partially saved budget can never be observed.
pub struct BudgetRepo;

impl BudgetRepo {
    /// Save a new budget with its items atomically, returning the created
    /// rows. New budgets always start in `borrador`.
    pub async fn save(pool: &PgPool, input: &SaveBudget) -> Result<BudgetWithItems, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO budgets (patient_id, tipo)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let budget = sqlx::query_as::<_, Budget>(&query)
            .bind(input.patient_id)
            .bind(&input.budget_type)
            .fetch_one(&mut *tx)
            .await?;

        let item_query = format!(
            "INSERT INTO budget_items (budget_id, accion, valor, orden)
             VALUES ($1, $2, $3, $4)
             RETURNING {ITEM_COLUMNS}"
        );
        let mut items = Vec::with_capacity(input.items.len());
        for item in &input.items {
            let row = sqlx::query_as::<_, BudgetItem>(&item_query)
                .bind(budget.id)
                .bind(&item.accion)
                .bind(item.valor)
                .bind(item.orden)
                .fetch_one(&mut *tx)
                .await?;
            items.push(row);
        }

        tx.commit().await?;
        Ok(BudgetWithItems { budget, items })
    }

    /// Find a budget by ID with its items ordered by `orden`.
    /// Excludes soft-deleted budgets.
    pub async fn find_with_items(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BudgetWithItems>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets WHERE id = $1 AND deleted_at IS NULL");
        let Some(budget) = sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let items = Self::items_for(pool, budget.id).await?;
        Ok(Some(BudgetWithItems { budget, items }))
    }

    /// List a patient's budgets, newest first, without items.
    pub async fn list_for_patient(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Vec<Budget>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM budgets
             WHERE patient_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(patient_id)
            .fetch_all(pool)
            .await
    }

    /// Change a budget's state. Returns `None` if no live row exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        estado: &str,
    ) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!(
            "UPDATE budgets SET estado = $2, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .bind(estado)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a budget. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE budgets SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Items for one budget, ordered by `orden`.
    async fn items_for(pool: &PgPool, budget_id: DbId) -> Result<Vec<BudgetItem>, sqlx::Error> {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM budget_items WHERE budget_id = $1 ORDER BY orden");
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(budget_id)
            .fetch_all(pool)
            .await
    }
}
