//! Handlers for the `/appointments` resource.
//!
//! Availability/conflict checking against existing bookings is performed by
//! an external service the front-end consults before booking; these handlers
//! only persist what they are given.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use clinica_core::dto::appointment::{CreateAppointmentInput, UpdateAppointmentInput};
use clinica_core::error::CoreError;
use clinica_core::types::DbId;
use clinica_db::models::appointment::Appointment;
use clinica_db::repositories::{AppointmentRepo, PatientRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::record_audit;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /appointments`.
#[derive(Debug, Deserialize)]
pub struct DayQuery {
    /// Day to list, `YYYY-MM-DD`. Defaults to today.
    pub fecha: Option<String>,
}

/// POST /api/v1/appointments
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateAppointmentInput>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let dto = input.validate()?;

    // The patient must exist (and not be soft-deleted).
    PatientRepo::find_by_id(&state.pool, dto.patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: dto.patient_id,
        }))?;

    let appointment = AppointmentRepo::create(&state.pool, &dto).await?;
    record_audit(&state, &auth, "create", "appointment", appointment.id).await;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// GET /api/v1/appointments?fecha=YYYY-MM-DD
///
/// List every appointment on one day (the agenda view).
pub async fn list_for_day(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<DayQuery>,
) -> AppResult<Json<Vec<Appointment>>> {
    let fecha = match params.fecha.as_deref() {
        Some(raw) => chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest("fecha must be YYYY-MM-DD".into()))?,
        None => chrono::Utc::now().date_naive(),
    };
    let appointments = AppointmentRepo::list_for_day(&state.pool, fecha).await?;
    Ok(Json(appointments))
}

/// GET /api/v1/patients/{patient_id}/appointments
pub async fn list_for_patient(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<Json<Vec<Appointment>>> {
    PatientRepo::find_by_id(&state.pool, patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: patient_id,
        }))?;

    let appointments = AppointmentRepo::list_for_patient(&state.pool, patient_id).await?;
    Ok(Json(appointments))
}

/// GET /api/v1/appointments/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Appointment>> {
    let appointment = AppointmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))?;
    Ok(Json(appointment))
}

/// PUT /api/v1/appointments/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAppointmentInput>,
) -> AppResult<Json<Appointment>> {
    let dto = input.validate()?;
    let appointment = AppointmentRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))?;
    record_audit(&state, &auth, "update", "appointment", id).await;
    Ok(Json(appointment))
}

/// DELETE /api/v1/appointments/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AppointmentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }));
    }
    record_audit(&state, &auth, "delete", "appointment", id).await;
    Ok(StatusCode::NO_CONTENT)
}
