// File: src/schema.rs
// Purpose: Field-name -> rule mappings and the schema evaluator

use std::collections::{BTreeMap, HashMap};

use asset_forms_validation::FieldValue;
use serde::Serialize;

use crate::rule::Rule;

/// Current values of a form, keyed by field name. Missing fields count as empty.
pub type FormRecord = HashMap<String, FieldValue>;

/// Builds a [`FormRecord`] from name/value pairs
pub fn record<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> FormRecord
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// Ordered mapping from field name to exactly one rule.
///
/// Fields keep their insertion order; inserting an existing name replaces
/// its rule in place.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    rules: Vec<(String, Rule)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Schema::insert`]
    pub fn field(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.insert(name, rule);
        self
    }

    /// Adds or replaces the rule for `name`, returning the previous rule
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) -> Option<Rule> {
        let name = name.into();
        match self.rules.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, rule)),
            None => {
                self.rules.push((name, rule));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rule)| rule)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in schema order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Single-field sub-schema holding only the rule for `name`
    pub fn only(&self, name: &str) -> Option<Schema> {
        self.get(name)
            .map(|rule| Schema::new().field(name, rule.clone()))
    }

    /// Runs every rule against `record` in schema order
    pub fn evaluate(&self, record: &FormRecord) -> ValidationResult {
        let mut errors = BTreeMap::new();

        for (field, rule) in self.iter() {
            if let Some(message) = rule.evaluate(field, record) {
                tracing::debug!(field, %message, "field failed validation");
                errors.insert(field.to_string(), message);
            }
        }

        ValidationResult::from_errors(errors)
    }
}

impl<S: Into<String>> FromIterator<(S, Rule)> for Schema {
    fn from_iter<I: IntoIterator<Item = (S, Rule)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, rule) in iter {
            schema.insert(name, rule);
        }
        schema
    }
}

/// Evaluates `record` against `schema`; pure function of its inputs
pub fn evaluate_schema(record: &FormRecord, schema: &Schema) -> ValidationResult {
    schema.evaluate(record)
}

/// Outcome of evaluating a schema: at most one message per failed field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self::from_errors(BTreeMap::new())
    }

    /// Validity is derived from the error map, never set independently
    pub fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}
