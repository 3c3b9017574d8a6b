//! Handlers for aesthetic notes (nested under patients for create/list).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use clinica_core::error::CoreError;
use clinica_core::types::DbId;
use clinica_db::models::aesthetic_note::{
    AestheticNote, CreateAestheticNote, UpdateAestheticNote,
};
use clinica_db::repositories::{AestheticNoteRepo, PatientRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::record_audit;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/patients/{patient_id}/aesthetic-notes
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
    Json(input): Json<CreateAestheticNote>,
) -> AppResult<(StatusCode, Json<AestheticNote>)> {
    PatientRepo::find_by_id(&state.pool, patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: patient_id,
        }))?;

    let note = AestheticNoteRepo::create(&state.pool, patient_id, &input).await?;
    record_audit(&state, &auth, "create", "aesthetic_note", note.id).await;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/v1/patients/{patient_id}/aesthetic-notes
pub async fn list_for_patient(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<Json<Vec<AestheticNote>>> {
    PatientRepo::find_by_id(&state.pool, patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: patient_id,
        }))?;

    let notes = AestheticNoteRepo::list_for_patient(&state.pool, patient_id).await?;
    Ok(Json(notes))
}

/// PUT /api/v1/aesthetic-notes/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAestheticNote>,
) -> AppResult<Json<AestheticNote>> {
    let note = AestheticNoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AestheticNote",
            id,
        }))?;
    record_audit(&state, &auth, "update", "aesthetic_note", id).await;
    Ok(Json(note))
}

/// DELETE /api/v1/aesthetic-notes/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AestheticNoteRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AestheticNote",
            id,
        }));
    }
    record_audit(&state, &auth, "delete", "aesthetic_note", id).await;
    Ok(StatusCode::NO_CONTENT)
}
