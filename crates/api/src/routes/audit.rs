//! Route definitions for the read-only `/audit` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes mounted at `/audit`.
///
/// ```text
/// GET /  -> list (?entidad, user_id, limit, offset)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(audit::list))
}
