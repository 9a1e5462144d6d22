//! Request-body validation glue.
//!
//! `actix_web_validator::Json` deserializes and runs `validator` before a
//! handler sees the payload. The error handler registered here turns its
//! failures into [`WebError`] so every 400 carries the same JSON shape.

use actix_web_validator::{Error as ValidatorError, JsonConfig};
use heck::ToLowerCamelCase;
use roomie_error::web::{FieldViolation, WebError};
use tracing::debug;
use validator::{ValidationErrors, ValidationErrorsKind};

/// JSON extractor config: body size limit plus the shared error mapping.
pub(crate) fn json_config(limit: usize) -> JsonConfig {
    JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            debug!(path = %req.path(), error = %err, "Rejected request body");
            into_web_error(err).into()
        })
}

fn into_web_error(err: ValidatorError) -> WebError {
    match err {
        ValidatorError::Validate(errors) => WebError::Validation(violations(&errors)),
        other => WebError::BadRequest(other.to_string()),
    }
}

/// Flatten nested `validator` errors into one list of field violations.
///
/// Field names are reported in the camelCase the client sent. Flattened
/// structs add no prefix; list items are reported as `field[index].inner`.
pub(crate) fn violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let name = format!("{prefix}{}", field.to_string().to_lower_camel_case());
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| FieldViolation {
                    field: name.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{name} is invalid ({})", e.code)),
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, prefix, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{name}[{index}]."), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomie_models::domain::prelude::{ChatRequest, NewContactLead};
    use validator::Validate;

    fn fields(errors: &ValidationErrors) -> Vec<String> {
        violations(errors).into_iter().map(|v| v.field).collect()
    }

    #[test]
    fn flattened_extras_keep_their_own_names() {
        let lead: NewContactLead = serde_json::from_value(serde_json::json!({
            "name": "Olena",
            "email": "olena@hotel.ua",
            "dataProcessing": false,
        }))
        .unwrap();

        let errors = lead.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["dataProcessing"]);
        assert_eq!(
            violations(&errors)[0].message,
            "consent to data processing is required"
        );
    }

    #[test]
    fn list_items_are_indexed() {
        let chat: ChatRequest = serde_json::from_value(serde_json::json!({
            "messages": [
                { "role": "user", "content": "hi" },
                { "role": "user", "content": "" },
            ]
        }))
        .unwrap();

        let errors = chat.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["messages[1].content"]);
    }
}
