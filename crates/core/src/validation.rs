//! Input validation helpers.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] turns the
//! collected field errors into a single [`CoreError::Validation`] message.

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Run the derived rules on `input`, flattening failures into one message.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Render validation errors as `field: reason` pairs, sorted by field name
/// so the message is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(list) => list
                .iter()
                .map(|e| {
                    let reason = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{field}: {reason}")
                })
                .collect::<Vec<_>>(),
            _ => vec![format!("{field}: invalid")],
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// The project-lead flag is stored as an integer and only 0 and 1 are meaningful.
pub fn validate_lead_flag(value: Option<i32>) -> Result<(), CoreError> {
    match value {
        None | Some(0) | Some(1) => Ok(()),
        Some(other) => Err(CoreError::Validation(format!(
            "jefe must be 0 or 1 (got {other})"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use validator::Validate;

    #[derive(Validate)]
    struct Person {
        #[validate(email(message = "must be a valid email address"))]
        email: String,
        #[validate(length(min = 3, max = 10))]
        name: String,
    }

    #[test]
    fn valid_input_passes() {
        let p = Person {
            email: "ana@pucv.cl".into(),
            name: "Ana Maria".into(),
        };
        assert!(validate_input(&p).is_ok());
    }

    #[test]
    fn errors_are_flattened_and_sorted() {
        let p = Person {
            email: "not-an-email".into(),
            name: "Al".into(),
        };
        let err = validate_input(&p).unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(msg) if msg == "email: must be a valid email address; name: length"
        );
    }

    #[test]
    fn lead_flag_accepts_only_zero_and_one() {
        assert!(validate_lead_flag(None).is_ok());
        assert!(validate_lead_flag(Some(0)).is_ok());
        assert!(validate_lead_flag(Some(1)).is_ok());
        assert_matches!(validate_lead_flag(Some(2)), Err(CoreError::Validation(_)));
    }
}
