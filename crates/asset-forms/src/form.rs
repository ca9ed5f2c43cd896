// File: src/form.rs
// Purpose: Per-form state driven by change/blur/submit events

use std::collections::{BTreeMap, BTreeSet};

use asset_forms_validation::FieldValue;
use serde::Serialize;

use crate::schema::{FormRecord, Schema};

/// Values, errors and touched flags of one open form.
///
/// Every key in `errors` and `touched` is a field declared in the form's
/// schema, and an error message is never empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub values: FormRecord,
    pub errors: BTreeMap<String, String>,
    pub touched: BTreeSet<String>,
}

/// Drives a [`FormState`] from user interaction.
///
/// Editing a field clears its error straight away; the field is only
/// re-validated when it loses focus or when the whole form is submitted.
///
/// ```
/// use asset_forms::{record, FormController, Rule, Schema};
///
/// let schema = Schema::new().field("email", Rule::new().required());
/// let mut form = FormController::new(record([("email", "")]), schema);
///
/// form.on_blur("email");
/// assert_eq!(form.visible_error("email"), Some("email is required"));
///
/// form.on_change("email", "ops@army.mil");
/// assert_eq!(form.error("email"), None);
/// assert!(form.validate_all());
/// ```
#[derive(Debug, Clone)]
pub struct FormController {
    schema: Schema,
    initial: FormRecord,
    state: FormState,
}

impl FormController {
    pub fn new(initial_values: FormRecord, schema: Schema) -> Self {
        Self {
            state: FormState {
                values: initial_values.clone(),
                ..FormState::default()
            },
            initial: initial_values,
            schema,
        }
    }

    /// Stores the new value and clears any error shown for the field
    pub fn on_change(&mut self, field: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        tracing::trace!(field, %value, "field changed");
        self.state.values.insert(field.to_string(), value);
        self.state.errors.remove(field);
    }

    /// Marks the field touched and validates it alone.
    ///
    /// Fields without a rule are ignored. Conditional requiredness still
    /// sees the full current record.
    pub fn on_blur(&mut self, field: &str) {
        let Some(sub_schema) = self.schema.only(field) else {
            tracing::trace!(field, "blur on field without a rule");
            return;
        };

        self.state.touched.insert(field.to_string());

        let result = sub_schema.evaluate(&self.state.values);
        match result.get_error(field) {
            Some(message) => {
                self.state
                    .errors
                    .insert(field.to_string(), message.to_string());
            }
            None => {
                self.state.errors.remove(field);
            }
        }
        tracing::debug!(field, valid = result.is_valid(), "field blurred");
    }

    /// Validates every field, replacing all errors and touching every schema field
    pub fn validate_all(&mut self) -> bool {
        let result = self.schema.evaluate(&self.state.values);
        let is_valid = result.is_valid();

        self.state.errors = result.into_errors();
        self.state.touched = self.schema.fields().map(str::to_string).collect();

        tracing::debug!(
            is_valid,
            error_count = self.state.errors.len(),
            "form validated"
        );
        is_valid
    }

    /// Restores the construction-time values and clears errors and touched flags
    pub fn reset(&mut self) {
        self.state = FormState {
            values: self.initial.clone(),
            ..FormState::default()
        };
        tracing::debug!("form reset");
    }

    /// Replaces every current value. Errors and touched flags are kept.
    pub fn set_values(&mut self, values: FormRecord) {
        self.state.values = values;
    }

    /// The error a renderer should display: only once the field is touched
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.state.values.get(field)
    }

    pub fn values(&self) -> &FormRecord {
        &self.state.values
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.state.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.state.errors
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.state.touched.contains(field)
    }

    pub fn touched(&self) -> &BTreeSet<String> {
        &self.state.touched
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Rule, Validator};
    use crate::schema::record;

    fn login() -> FormController {
        let schema = Schema::new()
            .field(
                "email",
                Rule::new()
                    .required()
                    .pattern(Validator::Email)
                    .message("Please enter a valid email address"),
            )
            .field(
                "password",
                Rule::new().required().message("Password is required"),
            );
        FormController::new(record([("email", ""), ("password", "")]), schema)
    }

    #[test]
    fn test_change_clears_error_optimistically() {
        let mut form = login();
        form.on_blur("email");
        assert!(form.error("email").is_some());

        form.on_change("email", "x");
        form.on_change("email", "");
        assert_eq!(form.error("email"), None);

        form.on_blur("email");
        assert_eq!(form.error("email"), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_blur_without_rule_is_ignored() {
        let mut form = login();
        form.on_change("nickname", "ghost");
        form.on_blur("nickname");
        assert!(!form.is_touched("nickname"));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_blur_only_touches_one_field() {
        let mut form = login();
        form.on_blur("password");
        assert!(form.is_touched("password"));
        assert!(!form.is_touched("email"));
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn test_visible_error_requires_touch() {
        let mut form = login();
        form.set_values(record([("email", "bad"), ("password", "")]));
        assert_eq!(form.visible_error("email"), None);

        assert!(!form.validate_all());
        assert_eq!(
            form.visible_error("email"),
            Some("Please enter a valid email address")
        );
    }
}
