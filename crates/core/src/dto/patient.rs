//! Patient create/update DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rut::{format_rut, is_valid_rut};
use crate::validation::{
    is_valid_email, not_in_future, optional_text, parse_date, required_text, ValidationErrors,
};

/// Raw body of `POST /patients`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePatientInput {
    pub rut: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub prevision: Option<String>,
}

/// A validated patient creation payload. The RUT is normalized and
/// checksum-verified, the birth date is parsed and not in the future.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePatient {
    pub rut: String,
    pub nombres: String,
    pub apellidos: String,
    pub fecha_nacimiento: NaiveDate,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub prevision: Option<String>,
}

impl CreatePatientInput {
    pub fn validate(self) -> Result<CreatePatient, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let rut = required_text(&mut errors, self.rut.as_deref(), "El RUT es obligatorio")
            .map(|raw| format_rut(&raw))
            .inspect(|formatted| {
                if !is_valid_rut(formatted) {
                    errors.push("El RUT no es válido");
                }
            });

        let nombres = required_text(
            &mut errors,
            self.nombres.as_deref(),
            "Los nombres son obligatorios",
        );
        let apellidos = required_text(
            &mut errors,
            self.apellidos.as_deref(),
            "Los apellidos son obligatorios",
        );

        let fecha_nacimiento = required_text(
            &mut errors,
            self.fecha_nacimiento.as_deref(),
            "La fecha de nacimiento es obligatoria",
        )
        .and_then(|raw| parse_date(&mut errors, &raw, "La fecha de nacimiento no es válida"))
        .inspect(|date| {
            not_in_future(&mut errors, *date, "La fecha de nacimiento no puede ser futura");
        });

        let email = optional_text(self.email);
        if let Some(email) = &email {
            if !is_valid_email(email) {
                errors.push("Email no es válido");
            }
        }

        let telefono = optional_text(self.telefono);
        let direccion = optional_text(self.direccion);
        let prevision = optional_text(self.prevision);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreatePatient {
            rut: rut.expect("checked above"),
            nombres: nombres.expect("checked above"),
            apellidos: apellidos.expect("checked above"),
            fecha_nacimiento: fecha_nacimiento.expect("checked above"),
            email,
            telefono,
            direccion,
            prevision,
        })
    }
}

/// Raw body of `PUT /patients/{id}`. Every field is optional; rules apply
/// only to fields that are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePatientInput {
    pub rut: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub prevision: Option<String>,
}

/// A validated partial patient update. `None` means "leave untouched".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePatient {
    pub rut: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub prevision: Option<String>,
}

impl UpdatePatientInput {
    pub fn validate(self) -> Result<UpdatePatient, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let rut = optional_text(self.rut)
            .map(|raw| format_rut(&raw))
            .inspect(|formatted| {
                if !is_valid_rut(formatted) {
                    errors.push("El RUT no es válido");
                }
            });

        let fecha_nacimiento = optional_text(self.fecha_nacimiento)
            .and_then(|raw| parse_date(&mut errors, &raw, "La fecha de nacimiento no es válida"))
            .inspect(|date| {
                not_in_future(&mut errors, *date, "La fecha de nacimiento no puede ser futura");
            });

        let email = optional_text(self.email);
        if let Some(email) = &email {
            if !is_valid_email(email) {
                errors.push("Email no es válido");
            }
        }

        let update = UpdatePatient {
            rut,
            nombres: optional_text(self.nombres),
            apellidos: optional_text(self.apellidos),
            fecha_nacimiento,
            email,
            telefono: optional_text(self.telefono),
            direccion: optional_text(self.direccion),
            prevision: optional_text(self.prevision),
        };

        errors.into_result(update)
    }
}
