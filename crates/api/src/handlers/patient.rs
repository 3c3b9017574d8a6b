//! Handlers for the `/patients` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use clinica_core::dto::patient::{CreatePatientInput, UpdatePatientInput};
use clinica_core::error::CoreError;
use clinica_core::types::DbId;
use clinica_db::models::patient::Patient;
use clinica_db::repositories::PatientRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::record_audit;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Maximum page size for patient listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for patient listing.
const DEFAULT_LIMIT: i64 = 50;

/// POST /api/v1/patients
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePatientInput>,
) -> AppResult<(StatusCode, Json<Patient>)> {
    let dto = input.validate()?;
    let patient = PatientRepo::create(&state.pool, &dto).await?;
    record_audit(&state, &auth, "create", "patient", patient.id).await;
    Ok((StatusCode::CREATED, Json(patient)))
}

/// GET /api/v1/patients
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Patient>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);
    let patients = PatientRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(patients))
}

/// GET /api/v1/patients/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Patient>> {
    let patient = PatientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id,
        }))?;
    Ok(Json(patient))
}

/// PUT /api/v1/patients/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePatientInput>,
) -> AppResult<Json<Patient>> {
    let dto = input.validate()?;
    let patient = PatientRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id,
        }))?;
    record_audit(&state, &auth, "update", "patient", id).await;
    Ok(Json(patient))
}

/// DELETE /api/v1/patients/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PatientRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id,
        }));
    }
    record_audit(&state, &auth, "delete", "patient", id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/patients/{id}/restore
pub async fn restore(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let restored = PatientRepo::restore(&state.pool, id).await?;
    if !restored {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id,
        }));
    }
    record_audit(&state, &auth, "restore", "patient", id).await;
    Ok(StatusCode::NO_CONTENT)
}
