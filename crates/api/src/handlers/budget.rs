//! Handlers for the `/budgets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use clinica_core::dto::budget::{SaveBudgetInput, UpdateBudgetStatusInput};
use clinica_core::error::CoreError;
use clinica_core::types::DbId;
use clinica_db::models::budget::{Budget, BudgetWithItems};
use clinica_db::repositories::{BudgetRepo, PatientRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::record_audit;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/budgets
///
/// Save a new budget with its items in one transaction.
pub async fn save(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SaveBudgetInput>,
) -> AppResult<(StatusCode, Json<BudgetWithItems>)> {
    let dto = input.validate()?;

    PatientRepo::find_by_id(&state.pool, dto.patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: dto.patient_id,
        }))?;

    let saved = BudgetRepo::save(&state.pool, &dto).await?;
    record_audit(&state, &auth, "create", "budget", saved.budget.id).await;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/budgets/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BudgetWithItems>> {
    let budget = BudgetRepo::find_with_items(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Budget",
            id,
        }))?;
    Ok(Json(budget))
}

/// GET /api/v1/patients/{patient_id}/budgets
pub async fn list_for_patient(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<Json<Vec<Budget>>> {
    PatientRepo::find_by_id(&state.pool, patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: patient_id,
        }))?;

    let budgets = BudgetRepo::list_for_patient(&state.pool, patient_id).await?;
    Ok(Json(budgets))
}

/// PUT /api/v1/budgets/{id}/status
pub async fn update_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBudgetStatusInput>,
) -> AppResult<Json<Budget>> {
    let dto = input.validate()?;
    let budget = BudgetRepo::update_status(&state.pool, id, &dto.estado)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Budget",
            id,
        }))?;
    record_audit(&state, &auth, "update_status", "budget", id).await;
    Ok(Json(budget))
}

/// DELETE /api/v1/budgets/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BudgetRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Budget",
            id,
        }));
    }
    record_audit(&state, &auth, "delete", "budget", id).await;
    Ok(StatusCode::NO_CONTENT)
}
