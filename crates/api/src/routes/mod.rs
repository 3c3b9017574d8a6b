pub mod aesthetic_note;
pub mod appointment;
pub mod audit;
pub mod auth;
pub mod budget;
pub mod health;
pub mod location;
pub mod notification;
pub mod patient;
pub mod prescription;
pub mod service;
pub mod treatment;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/change-password                            change password (requires auth)
///
/// /patients                                        list, create
/// /patients/{id}                                   get, update, soft delete
/// /patients/{id}/restore                           restore (POST)
/// /patients/{patient_id}/appointments              list (GET)
/// /patients/{patient_id}/budgets                   list (GET)
/// /patients/{patient_id}/treatments                list, create
/// /patients/{patient_id}/prescriptions             list, create
/// /patients/{patient_id}/aesthetic-notes           list, create
///
/// /appointments                                    day agenda (?fecha=), create
/// /appointments/{id}                               get, update, delete
///
/// /budgets                                         save with items (POST)
/// /budgets/{id}                                    get with items, soft delete
/// /budgets/{id}/status                             update state (PUT)
///
/// /treatments/{id}                                 get, update, delete
/// /prescriptions/{id}                              update, delete
/// /aesthetic-notes/{id}                            update, delete
///
/// /services                                        list (?include_inactive), create
/// /services/{id}                                   get, update, deactivate
/// /locations                                       list (?include_inactive), create
/// /locations/{id}                                  get, update, deactivate
///
/// /notifications                                   list (?unread_only, limit, offset)
/// /notifications/read-all                          mark all read (POST)
/// /notifications/unread-count                      unread count (GET)
/// /notifications/{id}/read                         mark read (POST)
///
/// /audit                                           list (?entidad, user_id, limit, offset)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/patients", patient::router())
        .nest("/appointments", appointment::router())
        .nest("/budgets", budget::router())
        .nest("/treatments", treatment::router())
        .nest("/prescriptions", prescription::router())
        .nest("/aesthetic-notes", aesthetic_note::router())
        .nest("/services", service::router())
        .nest("/locations", location::router())
        .nest("/notifications", notification::router())
        .nest("/audit", audit::router())
}
