//! Prescription create/update DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::{
    not_in_future, optional_text, parse_date, required_text, ValidationErrors,
};

/// Raw body of `POST /patients/{id}/prescriptions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePrescriptionInput {
    pub medicamento: Option<String>,
    pub dosis: Option<String>,
    pub indicaciones: Option<String>,
    pub fecha_emision: Option<String>,
}

/// A validated prescription. `fecha_emision` defaults to today when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePrescription {
    pub medicamento: String,
    pub dosis: String,
    pub indicaciones: Option<String>,
    pub fecha_emision: Option<NaiveDate>,
}

impl CreatePrescriptionInput {
    pub fn validate(self) -> Result<CreatePrescription, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let medicamento = required_text(
            &mut errors,
            self.medicamento.as_deref(),
            "El medicamento es obligatorio",
        );
        let dosis = required_text(&mut errors, self.dosis.as_deref(), "La dosis es obligatoria");

        let fecha_emision = optional_text(self.fecha_emision)
            .and_then(|raw| parse_date(&mut errors, &raw, "La fecha de emisión no es válida"))
            .inspect(|date| {
                not_in_future(&mut errors, *date, "La fecha de emisión no puede ser futura");
            });

        let indicaciones = optional_text(self.indicaciones);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreatePrescription {
            medicamento: medicamento.expect("checked above"),
            dosis: dosis.expect("checked above"),
            indicaciones,
            fecha_emision,
        })
    }
}

/// Raw body of `PUT /prescriptions/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePrescriptionInput {
    pub medicamento: Option<String>,
    pub dosis: Option<String>,
    pub indicaciones: Option<String>,
    pub fecha_emision: Option<String>,
}

/// A validated partial prescription update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePrescription {
    pub medicamento: Option<String>,
    pub dosis: Option<String>,
    pub indicaciones: Option<String>,
    pub fecha_emision: Option<NaiveDate>,
}

impl UpdatePrescriptionInput {
    pub fn validate(self) -> Result<UpdatePrescription, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let fecha_emision = optional_text(self.fecha_emision)
            .and_then(|raw| parse_date(&mut errors, &raw, "La fecha de emisión no es válida"))
            .inspect(|date| {
                not_in_future(&mut errors, *date, "La fecha de emisión no puede ser futura");
            });

        let update = UpdatePrescription {
            medicamento: optional_text(self.medicamento),
            dosis: optional_text(self.dosis),
            indicaciones: optional_text(self.indicaciones),
            fecha_emision,
        };

        errors.into_result(update)
    }
}
