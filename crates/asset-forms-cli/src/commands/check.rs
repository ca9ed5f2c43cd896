use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use asset_forms::{FieldValue, FormRecord, FormsConfig, Schema, ValidationResult};
use colored::Colorize;

/// Validates the record file and prints the outcome. Returns whether it was valid.
pub fn execute(config_path: &Path, form: &str, record_path: &Path, json: bool) -> Result<bool> {
    let config = FormsConfig::load(config_path)?;
    let schema = config
        .resolve(form)
        .with_context(|| format!("Cannot build schema for form '{}'", form))?;

    let record = load_record(record_path)?;
    tracing::debug!(form, fields = record.len(), "checking record");

    let result = schema.evaluate(&record);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(form, &schema, &result);
    }

    Ok(result.is_valid())
}

/// Reads a JSON object of string/number values. `null` fields count as absent.
pub fn load_record(path: &Path) -> Result<FormRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {:?}", path))?;

    let raw: HashMap<String, Option<FieldValue>> =
        serde_json::from_str(&content).with_context(|| {
            format!(
                "Record must be a JSON object of strings and numbers: {:?}",
                path
            )
        })?;

    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect())
}

fn print_report(form: &str, schema: &Schema, result: &ValidationResult) {
    if result.is_valid() {
        println!("{} {} is valid", "✓".green(), form.bold());
        return;
    }

    println!("{} {} has errors:", "✗".red(), form.bold());
    for field in schema.fields() {
        if let Some(message) = result.get_error(field) {
            println!("  {}: {}", field.cyan(), message);
        }
    }
}
