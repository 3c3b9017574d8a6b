//! Route definitions for the `/patients` resource and its nested records.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{aesthetic_note, appointment, budget, patient, prescription, treatment};
use crate::state::AppState;

/// Routes mounted at `/patients`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete (soft)
/// POST   /{id}/restore                      -> restore
///
/// GET    /{patient_id}/appointments         -> appointment::list_for_patient
/// GET    /{patient_id}/budgets              -> budget::list_for_patient
/// GET    /{patient_id}/treatments           -> treatment::list_for_patient
/// POST   /{patient_id}/treatments           -> treatment::create
/// GET    /{patient_id}/prescriptions        -> prescription::list_for_patient
/// POST   /{patient_id}/prescriptions        -> prescription::create
/// GET    /{patient_id}/aesthetic-notes      -> aesthetic_note::list_for_patient
/// POST   /{patient_id}/aesthetic-notes     -> aesthetic_note::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(patient::list).post(patient::create))
        .route(
            "/{id}",
            get(patient::get_by_id)
                .put(patient::update)
                .delete(patient::delete),
        )
        .route("/{id}/restore", post(patient::restore))
        // Nested clinical records.
        .route(
            "/{patient_id}/appointments",
            get(appointment::list_for_patient),
        )
        .route("/{patient_id}/budgets", get(budget::list_for_patient))
        .route(
            "/{patient_id}/treatments",
            get(treatment::list_for_patient).post(treatment::create),
        )
        .route(
            "/{patient_id}/prescriptions",
            get(prescription::list_for_patient).post(prescription::create),
        )
        .route(
            "/{patient_id}/aesthetic-notes",
            get(aesthetic_note::list_for_patient).post(aesthetic_note::create),
        )
}
