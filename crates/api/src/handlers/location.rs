//! Handlers for the `/locations` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use clinica_core::error::CoreError;
use clinica_core::types::DbId;
use clinica_db::models::location::{CreateLocation, Location, UpdateLocation};
use clinica_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::record_audit;
use crate::middleware::auth::AuthUser;
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

/// POST /api/v1/locations
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    if input.nombre.trim().is_empty() {
        return Err(AppError::BadRequest("nombre must not be empty".into()));
    }
    let location = LocationRepo::create(&state.pool, &input).await?;
    record_audit(&state, &auth, "create", "location", location.id).await;
    Ok((StatusCode::CREATED, Json(location)))
}

/// GET /api/v1/locations
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<Location>>> {
    let locations = LocationRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(locations))
}

/// GET /api/v1/locations/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Location>> {
    let location = LocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(location))
}

/// PUT /api/v1/locations/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<Json<Location>> {
    let location = LocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    record_audit(&state, &auth, "update", "location", id).await;
    Ok(Json(location))
}

/// DELETE /api/v1/locations/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = LocationRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }));
    }
    record_audit(&state, &auth, "deactivate", "location", id).await;
    Ok(StatusCode::NO_CONTENT)
}
