//! Route definitions for the `/locations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

/// Routes mounted at `/locations`.
///
/// ```text
/// GET    /      -> list (?include_inactive)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete (deactivate)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(location::list).post(location::create))
        .route(
            "/{id}",
            get(location::get_by_id)
                .put(location::update)
                .delete(location::delete),
        )
}
