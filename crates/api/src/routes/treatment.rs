//! Route definitions for the flat `/treatments` resource.
//!
//! Creation and listing live under `/patients/{patient_id}/treatments`.

use axum::routing::get;
use axum::Router;

use crate::handlers::treatment;
use crate::state::AppState;

/// Routes mounted at `/treatments`.
///
/// ```text
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(treatment::get_by_id)
            .put(treatment::update)
            .delete(treatment::delete),
    )
}
