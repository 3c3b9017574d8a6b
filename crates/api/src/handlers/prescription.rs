//! Handlers for prescriptions (nested under patients for create/list).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use clinica_core::dto::prescription::{CreatePrescriptionInput, UpdatePrescriptionInput};
use clinica_core::error::CoreError;
use clinica_core::types::DbId;
use clinica_db::models::prescription::Prescription;
use clinica_db::repositories::{PatientRepo, PrescriptionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::record_audit;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/patients/{patient_id}/prescriptions
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
    Json(input): Json<CreatePrescriptionInput>,
) -> AppResult<(StatusCode, Json<Prescription>)> {
    let dto = input.validate()?;

    PatientRepo::find_by_id(&state.pool, patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: patient_id,
        }))?;

    let prescription = PrescriptionRepo::create(&state.pool, patient_id, &dto).await?;
    record_audit(&state, &auth, "create", "prescription", prescription.id).await;
    Ok((StatusCode::CREATED, Json(prescription)))
}

/// GET /api/v1/patients/{patient_id}/prescriptions
pub async fn list_for_patient(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<Json<Vec<Prescription>>> {
    PatientRepo::find_by_id(&state.pool, patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: patient_id,
        }))?;

    let prescriptions = PrescriptionRepo::list_for_patient(&state.pool, patient_id).await?;
    Ok(Json(prescriptions))
}

/// PUT /api/v1/prescriptions/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePrescriptionInput>,
) -> AppResult<Json<Prescription>> {
    let dto = input.validate()?;
    let prescription = PrescriptionRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prescription",
            id,
        }))?;
    record_audit(&state, &auth, "update", "prescription", id).await;
    Ok(Json(prescription))
}

/// DELETE /api/v1/prescriptions/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PrescriptionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Prescription",
            id,
        }));
    }
    record_audit(&state, &auth, "delete", "prescription", id).await;
    Ok(StatusCode::NO_CONTENT)
}
