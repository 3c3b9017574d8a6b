//! Handlers for the `/services` catalog resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use clinica_core::error::CoreError;
use clinica_core::types::DbId;
use clinica_db::models::service::{CreateService, Service, UpdateService};
use clinica_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::record_audit;
use crate::middleware::auth::AuthUser;
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

/// POST /api/v1/services
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<(StatusCode, Json<Service>)> {
    if input.nombre.trim().is_empty() {
        return Err(AppError::BadRequest("nombre must not be empty".into()));
    }
    if input.precio <= 0.0 {
        return Err(AppError::BadRequest("precio must be greater than 0".into()));
    }
    let service = ServiceRepo::create(&state.pool, &input).await?;
    record_audit(&state, &auth, "create", "service", service.id).await;
    Ok((StatusCode::CREATED, Json(service)))
}

/// GET /api/v1/services
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<Service>>> {
    let services = ServiceRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(services))
}

/// GET /api/v1/services/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Service>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(service))
}

/// PUT /api/v1/services/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<Json<Service>> {
    if let Some(precio) = input.precio {
        if precio <= 0.0 {
            return Err(AppError::BadRequest("precio must be greater than 0".into()));
        }
    }
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    record_audit(&state, &auth, "update", "service", id).await;
    Ok(Json(service))
}

/// DELETE /api/v1/services/{id}
///
/// Deactivates the service; historical budgets keep referencing it by name.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = ServiceRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }));
    }
    record_audit(&state, &auth, "deactivate", "service", id).await;
    Ok(StatusCode::NO_CONTENT)
}
