//! Budget save/update DTOs.
//!
//! A budget is saved together with its ordered item list; items are
//! validated individually with index-qualified messages (1-based, matching
//! what the receptionist sees in the form).

use serde::{Deserialize, Serialize};

use crate::validation::{coerce_number, is_one_of, required_text, ValidationErrors};

/// Allowed budget types.
pub const BUDGET_TYPES: &[&str] = &["odontologico", "estetica"];

/// Allowed budget states.
pub const BUDGET_STATUSES: &[&str] = &["borrador", "aprobado", "rechazado"];

/// Raw body of `POST /patients/{id}/budgets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveBudgetInput {
    #[serde(rename = "patientId")]
    pub patient_id: Option<i64>,
    #[serde(rename = "budgetType")]
    pub budget_type: Option<String>,
    pub items: Option<Vec<BudgetItemInput>>,
}

/// Raw budget line item. `valor` accepts a JSON number or a numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetItemInput {
    pub accion: Option<String>,
    pub valor: Option<serde_json::Value>,
    pub orden: Option<i32>,
}

/// A validated budget ready for persistence. Serializes with the same wire
/// field names the raw input uses, so a validated budget round-trips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveBudget {
    #[serde(rename = "patientId")]
    pub patient_id: i64,
    #[serde(rename = "budgetType")]
    pub budget_type: String,
    pub items: Vec<BudgetItem>,
}

/// A validated budget line item. `orden` defaults to the item's position in
/// the input sequence when not explicitly supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetItem {
    pub accion: String,
    pub valor: f64,
    pub orden: i32,
}

impl SaveBudgetInput {
    pub fn validate(self) -> Result<SaveBudget, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let patient_id = match self.patient_id {
            Some(id) if id > 0 => Some(id),
            _ => {
                errors.push("El paciente es obligatorio");
                None
            }
        };

        let budget_type = required_text(
            &mut errors,
            self.budget_type.as_deref(),
            "El tipo de presupuesto es obligatorio",
        )
        .inspect(|tipo| {
            if !is_one_of(tipo, BUDGET_TYPES) {
                errors.push("El tipo de presupuesto no es válido");
            }
        });

        let raw_items = self.items.unwrap_or_default();
        if raw_items.is_empty() {
            errors.push("El presupuesto debe tener al menos un ítem");
        }

        let mut items = Vec::with_capacity(raw_items.len());
        for (index, item) in raw_items.into_iter().enumerate() {
            if let Some(item) = validate_item(&mut errors, item, index) {
                items.push(item);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SaveBudget {
            patient_id: patient_id.expect("checked above"),
            budget_type: budget_type.expect("checked above"),
            items,
        })
    }
}

/// Validate one line item. `index` is the 0-based position in the input;
/// messages use the 1-based position.
fn validate_item(
    errors: &mut ValidationErrors,
    item: BudgetItemInput,
    index: usize,
) -> Option<BudgetItem> {
    let position = index + 1;

    let accion = required_text(
        errors,
        item.accion.as_deref(),
        &format!("Ítem {position}: Acción es obligatoria"),
    );

    let valor = match item.valor.as_ref().and_then(coerce_number) {
        Some(n) if n > 0.0 => Some(n),
        Some(_) => {
            errors.push(format!("Ítem {position}: Valor debe ser mayor a 0"));
            None
        }
        None => {
            errors.push(format!("Ítem {position}: Valor no es válido"));
            None
        }
    };

    Some(BudgetItem {
        accion: accion?,
        valor: valor?,
        orden: item.orden.unwrap_or(index as i32),
    })
}

/// Raw body of `PUT /budgets/{id}/status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBudgetStatusInput {
    pub estado: Option<String>,
}

/// A validated budget status change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateBudgetStatus {
    pub estado: String,
}

impl UpdateBudgetStatusInput {
    pub fn validate(self) -> Result<UpdateBudgetStatus, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let estado = required_text(&mut errors, self.estado.as_deref(), "El estado es obligatorio")
            .inspect(|estado| {
                if !is_one_of(estado, BUDGET_STATUSES) {
                    errors.push("El estado no es válido");
                }
            });

        errors.into_result(UpdateBudgetStatus {
            estado: estado.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(accion: &str, valor: serde_json::Value) -> BudgetItemInput {
        BudgetItemInput {
            accion: Some(accion.into()),
            valor: Some(valor),
            orden: None,
        }
    }

    fn valid_input() -> SaveBudgetInput {
        SaveBudgetInput {
            patient_id: Some(5),
            budget_type: Some("odontologico".into()),
            items: Some(vec![
                item("Limpieza", serde_json::json!(25000)),
                item("Destartraje", serde_json::json!("45000")),
            ]),
        }
    }

    #[test]
    fn save_valid() {
        let budget = valid_input().validate().expect("input should validate");
        assert_eq!(budget.patient_id, 5);
        assert_eq!(budget.items.len(), 2);
        // String-typed amounts are coerced.
        assert_eq!(budget.items[1].valor, 45000.0);
        // orden defaults to the input position.
        assert_eq!(budget.items[0].orden, 0);
        assert_eq!(budget.items[1].orden, 1);
    }

    #[test]
    fn explicit_orden_wins() {
        let mut input = valid_input();
        input.items.as_mut().unwrap()[0].orden = Some(7);
        let budget = input.validate().expect("input should validate");
        assert_eq!(budget.items[0].orden, 7);
    }

    #[test]
    fn zero_valor_rejected_with_position() {
        let input = SaveBudgetInput {
            patient_id: Some(5),
            budget_type: Some("odontologico".into()),
            items: Some(vec![item("limpieza", serde_json::json!(0))]),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.messages(), ["Ítem 1: Valor debe ser mayor a 0"]);
    }

    #[test]
    fn non_numeric_valor_rejected() {
        let mut input = valid_input();
        input.items.as_mut().unwrap()[1].valor = Some(serde_json::json!("mucho"));
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.messages(), ["Ítem 2: Valor no es válido"]);
    }

    #[test]
    fn empty_items_rejected() {
        let input = SaveBudgetInput {
            patient_id: Some(5),
            budget_type: Some("estetica".into()),
            items: Some(vec![]),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.messages(), ["El presupuesto debe tener al menos un ítem"]);
    }

    #[test]
    fn unknown_budget_type_rejected() {
        let mut input = valid_input();
        input.budget_type = Some("kinesiologia".into());
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.messages(), ["El tipo de presupuesto no es válido"]);
    }

    #[test]
    fn missing_everything_collects_all() {
        let errors = SaveBudgetInput::default().validate().unwrap_err();
        assert_eq!(
            errors.messages(),
            [
                "El paciente es obligatorio",
                "El tipo de presupuesto es obligatorio",
                "El presupuesto debe tener al menos un ítem",
            ]
        );
    }

    #[test]
    fn status_update() {
        let ok = UpdateBudgetStatusInput { estado: Some("aprobado".into()) };
        assert_eq!(ok.validate().unwrap().estado, "aprobado");

        let bad = UpdateBudgetStatusInput { estado: Some("pagado".into()) };
        assert_eq!(bad.validate().unwrap_err().messages(), ["El estado no es válido"]);
    }
}
