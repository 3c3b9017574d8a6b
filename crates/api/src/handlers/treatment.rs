//! Handlers for treatments (nested under patients for create/list).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use clinica_core::dto::treatment::{CreateTreatmentInput, UpdateTreatmentInput};
use clinica_core::error::CoreError;
use clinica_core::types::DbId;
use clinica_db::models::treatment::Treatment;
use clinica_db::repositories::{PatientRepo, TreatmentRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::record_audit;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/patients/{patient_id}/treatments
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
    Json(input): Json<CreateTreatmentInput>,
) -> AppResult<(StatusCode, Json<Treatment>)> {
    let dto = input.validate()?;

    PatientRepo::find_by_id(&state.pool, patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: patient_id,
        }))?;

    let treatment = TreatmentRepo::create(&state.pool, patient_id, &dto).await?;
    record_audit(&state, &auth, "create", "treatment", treatment.id).await;
    Ok((StatusCode::CREATED, Json(treatment)))
}

/// GET /api/v1/patients/{patient_id}/treatments
pub async fn list_for_patient(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<Json<Vec<Treatment>>> {
    PatientRepo::find_by_id(&state.pool, patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: patient_id,
        }))?;

    let treatments = TreatmentRepo::list_for_patient(&state.pool, patient_id).await?;
    Ok(Json(treatments))
}

/// GET /api/v1/treatments/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Treatment>> {
    let treatment = TreatmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Treatment",
            id,
        }))?;
    Ok(Json(treatment))
}

/// PUT /api/v1/treatments/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTreatmentInput>,
) -> AppResult<Json<Treatment>> {
    let dto = input.validate()?;
    let treatment = TreatmentRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Treatment",
            id,
        }))?;
    record_audit(&state, &auth, "update", "treatment", id).await;
    Ok(Json(treatment))
}

/// DELETE /api/v1/treatments/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TreatmentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Treatment",
            id,
        }));
    }
    record_audit(&state, &auth, "delete", "treatment", id).await;
    Ok(StatusCode::NO_CONTENT)
}
