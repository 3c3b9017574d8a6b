//! Appointment create/update DTOs.
//!
//! Appointment dates may be in the future (they usually are); only the
//! format and enum rules apply here. Availability checking against existing
//! bookings is a separate collaborator, not part of payload validation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::validation::{
    is_one_of, optional_text, parse_date, parse_time, required_text, ValidationErrors,
};

/// Allowed appointment states.
pub const APPOINTMENT_STATUSES: &[&str] =
    &["pendiente", "confirmada", "cancelada", "completada"];

/// Raw body of `POST /appointments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAppointmentInput {
    #[serde(rename = "patientId")]
    pub patient_id: Option<i64>,
    pub fecha: Option<String>,
    pub hora: Option<String>,
    pub motivo: Option<String>,
    pub estado: Option<String>,
}

/// A validated appointment. `estado` defaults to `"pendiente"`. Serializes
/// with the same wire field names the raw input uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateAppointment {
    #[serde(rename = "patientId")]
    pub patient_id: i64,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub motivo: Option<String>,
    pub estado: String,
}

impl CreateAppointmentInput {
    pub fn validate(self) -> Result<CreateAppointment, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let patient_id = match self.patient_id {
            Some(id) if id > 0 => Some(id),
            _ => {
                errors.push("El paciente es obligatorio");
                None
            }
        };

        let fecha = required_text(&mut errors, self.fecha.as_deref(), "La fecha es obligatoria")
            .and_then(|raw| parse_date(&mut errors, &raw, "La fecha no es válida"));

        let hora = required_text(&mut errors, self.hora.as_deref(), "La hora es obligatoria")
            .and_then(|raw| parse_time(&mut errors, &raw, "La hora no es válida"));

        let estado = match optional_text(self.estado) {
            Some(estado) if is_one_of(&estado, APPOINTMENT_STATUSES) => estado,
            Some(_) => {
                errors.push("El estado no es válido");
                String::new()
            }
            None => "pendiente".to_string(),
        };

        let motivo = optional_text(self.motivo);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateAppointment {
            patient_id: patient_id.expect("checked above"),
            fecha: fecha.expect("checked above"),
            hora: hora.expect("checked above"),
            motivo,
            estado,
        })
    }
}

/// Raw body of `PUT /appointments/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAppointmentInput {
    pub fecha: Option<String>,
    pub hora: Option<String>,
    pub motivo: Option<String>,
    pub estado: Option<String>,
}

/// A validated partial appointment update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateAppointment {
    pub fecha: Option<NaiveDate>,
    pub hora: Option<NaiveTime>,
    pub motivo: Option<String>,
    pub estado: Option<String>,
}

impl UpdateAppointmentInput {
    pub fn validate(self) -> Result<UpdateAppointment, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let fecha = optional_text(self.fecha)
            .and_then(|raw| parse_date(&mut errors, &raw, "La fecha no es válida"));

        let hora = optional_text(self.hora)
            .and_then(|raw| parse_time(&mut errors, &raw, "La hora no es válida"));

        let estado = optional_text(self.estado).inspect(|estado| {
            if !is_one_of(estado, APPOINTMENT_STATUSES) {
                errors.push("El estado no es válido");
            }
        });

        let update = UpdateAppointment {
            fecha,
            hora,
            motivo: optional_text(self.motivo),
            estado,
        };

        errors.into_result(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_valid_defaults_estado() {
        let input = CreateAppointmentInput {
            patient_id: Some(3),
            fecha: Some("2099-04-01".into()),
            hora: Some("15:00".into()),
            motivo: Some("Control".into()),
            estado: None,
        };
        let appointment = input.validate().expect("input should validate");
        assert_eq!(appointment.estado, "pendiente");
        // Future appointment dates are legal.
        assert_eq!(appointment.fecha, NaiveDate::from_ymd_opt(2099, 4, 1).unwrap());
    }

    #[test]
    fn create_rejects_unknown_estado() {
        let input = CreateAppointmentInput {
            patient_id: Some(3),
            fecha: Some("2024-04-01".into()),
            hora: Some("15:00".into()),
            motivo: None,
            estado: Some("agendada".into()),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.messages(), ["El estado no es válido"]);
    }

    #[test]
    fn create_missing_fields_collects_all() {
        let errors = CreateAppointmentInput::default().validate().unwrap_err();
        assert_eq!(
            errors.messages(),
            [
                "El paciente es obligatorio",
                "La fecha es obligatoria",
                "La hora es obligatoria",
            ]
        );
    }

    #[test]
    fn update_estado_only() {
        let input = UpdateAppointmentInput {
            estado: Some("confirmada".into()),
            ..Default::default()
        };
        let update = input.validate().expect("input should validate");
        assert_eq!(update.estado.as_deref(), Some("confirmada"));
        assert_eq!(update.fecha, None);
    }
}
