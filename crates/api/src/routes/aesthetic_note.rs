//! Route definitions for the flat `/aesthetic-notes` resource.
//!
//! Creation and listing live under `/patients/{patient_id}/aesthetic-notes`.

use axum::routing::put;
use axum::Router;

use crate::handlers::aesthetic_note;
use crate::state::AppState;

/// Routes mounted at `/aesthetic-notes`.
///
/// ```text
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(aesthetic_note::update).delete(aesthetic_note::delete),
    )
}
