//! Route definitions for the `/budgets` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::budget;
use crate::state::AppState;

/// Routes mounted at `/budgets`.
///
/// ```text
/// POST   /              -> save (budget + items, transactional)
/// GET    /{id}          -> get_by_id (with items)
/// DELETE /{id}          -> delete (soft)
/// PUT    /{id}/status   -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(budget::save))
        .route("/{id}", get(budget::get_by_id).delete(budget::delete))
        .route("/{id}/status", put(budget::update_status))
}
