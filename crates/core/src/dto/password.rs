//! Change-password DTO.
//!
//! Passwords are never trimmed; a whitespace-only value still counts as
//! missing, but interior whitespace is preserved verbatim.

use serde::Deserialize;

use crate::validation::ValidationErrors;

/// Minimum length for a new password, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Raw body of `POST /auth/change-password`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangePasswordInput {
    pub actual: Option<String>,
    pub nueva: Option<String>,
}

/// A validated password change request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangePassword {
    pub actual: String,
    pub nueva: String,
}

impl ChangePasswordInput {
    pub fn validate(self) -> Result<ChangePassword, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let actual = match self.actual {
            Some(v) if !v.trim().is_empty() => Some(v),
            _ => {
                errors.push("La contraseña actual es obligatoria");
                None
            }
        };

        let nueva = match self.nueva {
            Some(v) if !v.trim().is_empty() => {
                if v.chars().count() < MIN_PASSWORD_CHARS {
                    errors.push("La nueva contraseña debe tener al menos 8 caracteres");
                    None
                } else {
                    Some(v)
                }
            }
            _ => {
                errors.push("La nueva contraseña es obligatoria");
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ChangePassword {
            actual: actual.expect("checked above"),
            nueva: nueva.expect("checked above"),
        })
    }
}
