//! Route definitions for the flat `/prescriptions` resource.
//!
//! Creation and listing live under `/patients/{patient_id}/prescriptions`.

use axum::routing::put;
use axum::Router;

use crate::handlers::prescription;
use crate::state::AppState;

/// Routes mounted at `/prescriptions`.
///
/// ```text
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(prescription::update).delete(prescription::delete),
    )
}
