// File: src/rule.rs
// Purpose: Per-field validation rules and the dispatcher that evaluates them

use std::fmt;
use std::sync::Arc;

use asset_forms_validation::{
    is_non_empty, is_valid_asset_id, is_valid_base_id, is_valid_email, is_valid_number,
    is_valid_password, validate_max_length, validate_min_length, FieldValue,
};

use crate::schema::FormRecord;

/// Predicate over the whole record, used for conditional requiredness
pub type RecordPredicate = Arc<dyn Fn(&FormRecord) -> bool + Send + Sync>;

/// Predicate over a single value; `true` means valid
pub type ValuePredicate = Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// Whether a field must hold a value
#[derive(Clone, Default)]
pub enum Requirement {
    #[default]
    Optional,
    Always,
    /// Required only when the predicate holds for the current record
    When(RecordPredicate),
}

impl Requirement {
    /// Required only while `field` holds exactly `expected`
    pub fn when_equals(field: impl Into<String>, expected: impl Into<String>) -> Self {
        let field = field.into();
        let expected = expected.into();
        Requirement::When(Arc::new(move |record: &FormRecord| {
            record
                .get(&field)
                .is_some_and(|value| value.to_text() == expected)
        }))
    }

    pub fn resolve(&self, record: &FormRecord) -> bool {
        match self {
            Requirement::Optional => false,
            Requirement::Always => true,
            Requirement::When(predicate) => predicate(record),
        }
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Optional => f.write_str("Optional"),
            Requirement::Always => f.write_str("Always"),
            Requirement::When(_) => f.write_str("When(<predicate>)"),
        }
    }
}

/// Named format validators
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    Email,
    Password,
    AssetId,
    BaseId,
    Number { min: Option<f64>, max: Option<f64> },
}

impl Validator {
    pub fn test(&self, value: &FieldValue) -> bool {
        match self {
            Validator::Email => is_valid_email(&value.to_text()),
            Validator::Password => is_valid_password(&value.to_text()),
            Validator::AssetId => is_valid_asset_id(&value.to_text()),
            Validator::BaseId => is_valid_base_id(&value.to_text()),
            Validator::Number { min, max } => is_valid_number(value, *min, *max),
        }
    }
}

/// The final check of a rule, run only on non-empty values that passed the length bounds
#[derive(Clone)]
pub enum Check {
    Pattern(Validator),
    Custom(ValuePredicate),
}

impl Check {
    pub fn test(&self, value: &FieldValue) -> bool {
        match self {
            Check::Pattern(validator) => validator.test(value),
            Check::Custom(predicate) => predicate(value),
        }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Pattern(validator) => f.debug_tuple("Pattern").field(validator).finish(),
            Check::Custom(_) => f.write_str("Custom(<predicate>)"),
        }
    }
}

/// Constraints on one field.
///
/// Built with chained setters:
///
/// ```
/// use asset_forms::{Rule, Validator};
///
/// let rule = Rule::new()
///     .required()
///     .min_length(2)
///     .max_length(100)
///     .message("Vendor name must be 2-100 characters");
/// assert!(rule.requirement().resolve(&Default::default()));
///
/// let quantity = Rule::new()
///     .required()
///     .pattern(Validator::Number { min: Some(1.0), max: None });
/// assert!(quantity.check().is_some());
/// ```
///
/// Evaluation always runs in the same order, whatever order the setters
/// were called in: required, min length, max length, then the check.
/// The first failure wins.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    requirement: Requirement,
    min_length: Option<usize>,
    max_length: Option<usize>,
    check: Option<Check>,
    message: Option<String>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Always;
        self
    }

    /// Required only when `predicate` holds for the full record
    pub fn required_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&FormRecord) -> bool + Send + Sync + 'static,
    {
        self.requirement = Requirement::When(Arc::new(predicate));
        self
    }

    pub fn requirement_of(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, validator: Validator) -> Self {
        self.check = Some(Check::Pattern(validator));
        self
    }

    /// Custom predicate; returns `true` when the value is valid
    pub fn validate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        self.check = Some(Check::Custom(Arc::new(predicate)));
        self
    }

    /// Message used for every failure of this rule
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    pub fn check(&self) -> Option<&Check> {
        self.check.as_ref()
    }

    /// Evaluates `field` of `record` against this rule.
    ///
    /// Returns the error message for the first failed constraint, or `None`.
    /// An empty value on a field that is not required is never checked.
    pub fn evaluate(&self, field: &str, record: &FormRecord) -> Option<String> {
        let value = record.get(field);
        let present = is_non_empty(value);

        if self.requirement.resolve(record) && !present {
            return Some(self.failure(|| format!("{} is required", field)));
        }

        let value = value.filter(|_| present)?;

        if let Some(min) = self.min_length {
            if validate_min_length(value, min).is_err() {
                return Some(
                    self.failure(|| format!("{} must be at least {} characters", field, min)),
                );
            }
        }

        if let Some(max) = self.max_length {
            if validate_max_length(value, max).is_err() {
                return Some(
                    self.failure(|| format!("{} must be no more than {} characters", field, max)),
                );
            }
        }

        match &self.check {
            Some(check) if !check.test(value) => {
                Some(self.failure(|| format!("{} is invalid", field)))
            }
            _ => None,
        }
    }

    // An empty custom message falls back to the default, so errors are never blank
    fn failure(&self, default: impl FnOnce() -> String) -> String {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => default(),
        }
    }
}
