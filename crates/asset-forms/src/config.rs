// File: src/config.rs
// Purpose: Form schemas declared in forms.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::builtin::builtin_schema;
use crate::error::SchemaError;
use crate::rule::{Requirement, Rule, Validator};
use crate::schema::Schema;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "forms.toml";

/// Form definitions loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormsConfig {
    #[serde(default)]
    pub forms: Vec<FormDefinition>,
}

/// One `[[forms]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormDefinition {
    pub name: String,

    /// Fields in evaluation order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// One `[[forms.fields]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FieldDefinition {
    pub name: String,

    #[serde(default)]
    pub required: bool,

    /// Required only while another field holds a given value
    #[serde(default)]
    pub required_when: Option<Condition>,

    #[serde(default)]
    pub min_length: Option<usize>,

    #[serde(default)]
    pub max_length: Option<usize>,

    /// One of: email, password, asset_id, base_id, number
    #[serde(default)]
    pub validator: Option<String>,

    /// Lower bound for the `number` validator
    #[serde(default)]
    pub min: Option<f64>,

    /// Upper bound for the `number` validator
    #[serde(default)]
    pub max: Option<f64>,

    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    pub field: String,
    pub equals: String,
}

impl FormsConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing or blank file yields an empty configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read forms config: {:?}", path))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse forms config: {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn form_names(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(|form| form.name.as_str())
    }

    /// Builds every configured schema, in file order
    pub fn schemas(&self) -> Result<Vec<(String, Schema)>, SchemaError> {
        let mut seen = HashSet::new();
        let mut schemas = Vec::with_capacity(self.forms.len());

        for form in &self.forms {
            if !seen.insert(form.name.as_str()) {
                return Err(SchemaError::DuplicateForm(form.name.clone()));
            }
            schemas.push((form.name.clone(), form.to_schema()?));
        }

        Ok(schemas)
    }

    /// Looks up a form by name. Configured forms take precedence over built-ins.
    pub fn resolve(&self, name: &str) -> Result<Schema, SchemaError> {
        match self.forms.iter().find(|form| form.name == name) {
            Some(form) => form.to_schema(),
            None => {
                builtin_schema(name).ok_or_else(|| SchemaError::UnknownForm(name.to_string()))
            }
        }
    }
}

impl FormDefinition {
    pub fn to_schema(&self) -> Result<Schema, SchemaError> {
        let mut schema = Schema::new();

        for field in &self.fields {
            if schema.contains(&field.name) {
                return Err(SchemaError::DuplicateField {
                    form: self.name.clone(),
                    field: field.name.clone(),
                });
            }

            if let Some(condition) = &field.required_when {
                if !self.fields.iter().any(|f| f.name == condition.field) {
                    tracing::warn!(
                        form = %self.name,
                        field = %field.name,
                        depends_on = %condition.field,
                        "required_when references a field outside the form"
                    );
                }
            }

            schema.insert(field.name.clone(), field.to_rule(&self.name)?);
        }

        Ok(schema)
    }
}

impl FieldDefinition {
    pub fn to_rule(&self, form: &str) -> Result<Rule, SchemaError> {
        let requirement = match (&self.required_when, self.required) {
            (Some(_), true) => {
                return Err(SchemaError::ConflictingRequirement {
                    form: form.to_string(),
                    field: self.name.clone(),
                })
            }
            (Some(condition), false) => {
                Requirement::when_equals(condition.field.clone(), condition.equals.clone())
            }
            (None, true) => Requirement::Always,
            (None, false) => Requirement::Optional,
        };

        let mut rule = Rule::new().requirement_of(requirement);

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(self.inverted(form, min as f64, max as f64));
            }
        }
        if let Some(min) = self.min_length {
            rule = rule.min_length(min);
        }
        if let Some(max) = self.max_length {
            rule = rule.max_length(max);
        }

        if let Some(validator) = self.validator(form)? {
            rule = rule.pattern(validator);
        }

        if let Some(message) = &self.message {
            rule = rule.message(message.clone());
        }

        Ok(rule)
    }

    fn validator(&self, form: &str) -> Result<Option<Validator>, SchemaError> {
        let has_bounds = self.min.is_some() || self.max.is_some();
        let name = self.validator.as_deref();

        if has_bounds && name != Some("number") {
            return Err(SchemaError::BoundsWithoutNumber {
                form: form.to_string(),
                field: self.name.clone(),
            });
        }

        let validator = match name {
            None => return Ok(None),
            Some("email") => Validator::Email,
            Some("password") => Validator::Password,
            Some("asset_id") => Validator::AssetId,
            Some("base_id") => Validator::BaseId,
            Some("number") => {
                if let (Some(min), Some(max)) = (self.min, self.max) {
                    if min > max {
                        return Err(self.inverted(form, min, max));
                    }
                }
                Validator::Number {
                    min: self.min,
                    max: self.max,
                }
            }
            Some(other) => {
                return Err(SchemaError::UnknownValidator {
                    form: form.to_string(),
                    field: self.name.clone(),
                    validator: other.to_string(),
                })
            }
        };

        Ok(Some(validator))
    }

    fn inverted(&self, form: &str, min: f64, max: f64) -> SchemaError {
        SchemaError::InvertedBounds {
            form: form.to_string(),
            field: self.name.clone(),
            min,
            max,
        }
    }
}
