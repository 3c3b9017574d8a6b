//! Budget entity models.

use clinica_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A budget row from the `budgets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub id: DbId,
    pub patient_id: DbId,
    pub tipo: String,
    pub estado: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A budget line item from the `budget_items` table, ordered by `orden`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BudgetItem {
    pub id: DbId,
    pub budget_id: DbId,
    pub accion: String,
    pub valor: f64,
    pub orden: i32,
}

/// A budget together with its ordered items, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetWithItems {
    #[serde(flatten)]
    pub budget: Budget,
    pub items: Vec<BudgetItem>,
}
