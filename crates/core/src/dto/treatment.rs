//! Treatment (control session) create/update DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::validation::{
    not_in_future, optional_text, parse_date, parse_time, required_text, ValidationErrors,
};

/// Raw body of `POST /patients/{id}/treatments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTreatmentInput {
    pub fecha_control: Option<String>,
    pub hora_control: Option<String>,
    pub nombre_servicio: Option<String>,
    pub producto: Option<String>,
    pub lote_producto: Option<String>,
    pub dosis: Option<String>,
    pub recomendaciones: Option<String>,
}

/// A validated treatment record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTreatment {
    pub fecha_control: NaiveDate,
    pub hora_control: NaiveTime,
    pub nombre_servicio: String,
    pub producto: Option<String>,
    pub lote_producto: Option<String>,
    pub dosis: Option<String>,
    pub recomendaciones: Option<String>,
}

impl CreateTreatmentInput {
    pub fn validate(self) -> Result<CreateTreatment, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let fecha_control = required_text(
            &mut errors,
            self.fecha_control.as_deref(),
            "La fecha de control es obligatoria",
        )
        .and_then(|raw| parse_date(&mut errors, &raw, "La fecha de control no es válida"))
        .inspect(|date| {
            not_in_future(&mut errors, *date, "La fecha de control no puede ser futura");
        });

        let hora_control = required_text(
            &mut errors,
            self.hora_control.as_deref(),
            "La hora de control es obligatoria",
        )
        .and_then(|raw| parse_time(&mut errors, &raw, "La hora de control no es válida"));

        let nombre_servicio = required_text(
            &mut errors,
            self.nombre_servicio.as_deref(),
            "El nombre del servicio es obligatorio",
        );

        let producto = optional_text(self.producto);
        let lote_producto = optional_text(self.lote_producto);
        let dosis = optional_text(self.dosis);
        let recomendaciones = optional_text(self.recomendaciones);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateTreatment {
            fecha_control: fecha_control.expect("checked above"),
            hora_control: hora_control.expect("checked above"),
            nombre_servicio: nombre_servicio.expect("checked above"),
            producto,
            lote_producto,
            dosis,
            recomendaciones,
        })
    }
}

/// Raw body of `PUT /treatments/{id}`. Rules apply per present field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTreatmentInput {
    pub fecha_control: Option<String>,
    pub hora_control: Option<String>,
    pub nombre_servicio: Option<String>,
    pub producto: Option<String>,
    pub lote_producto: Option<String>,
    pub dosis: Option<String>,
    pub recomendaciones: Option<String>,
}

/// A validated partial treatment update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTreatment {
    pub fecha_control: Option<NaiveDate>,
    pub hora_control: Option<NaiveTime>,
    pub nombre_servicio: Option<String>,
    pub producto: Option<String>,
    pub lote_producto: Option<String>,
    pub dosis: Option<String>,
    pub recomendaciones: Option<String>,
}

impl UpdateTreatmentInput {
    pub fn validate(self) -> Result<UpdateTreatment, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let fecha_control = optional_text(self.fecha_control)
            .and_then(|raw| parse_date(&mut errors, &raw, "La fecha de control no es válida"))
            .inspect(|date| {
                not_in_future(&mut errors, *date, "La fecha de control no puede ser futura");
            });

        let hora_control = optional_text(self.hora_control)
            .and_then(|raw| parse_time(&mut errors, &raw, "La hora de control no es válida"));

        let update = UpdateTreatment {
            fecha_control,
            hora_control,
            nombre_servicio: optional_text(self.nombre_servicio),
            producto: optional_text(self.producto),
            lote_producto: optional_text(self.lote_producto),
            dosis: optional_text(self.dosis),
            recomendaciones: optional_text(self.recomendaciones),
        };

        errors.into_result(update)
    }
}
