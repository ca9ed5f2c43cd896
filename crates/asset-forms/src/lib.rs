//! # asset-forms
//!
//! Schema-driven form validation for the asset logistics admin: purchases,
//! transfers and assignments across bases.
//!
//! ## Quick Start
//!
//! ```rust
//! use asset_forms::{record, FormController, register_schema};
//!
//! let mut form = FormController::new(
//!     record([
//!         ("username", ""),
//!         ("email", ""),
//!         ("password", ""),
//!         ("role", "base_commander"),
//!         ("baseId", ""),
//!     ]),
//!     register_schema(),
//! );
//!
//! form.on_change("username", "sgt_rivera");
//! form.on_change("email", "rivera@army.mil");
//! form.on_change("password", "Logist1cs");
//!
//! // base commanders must name their base
//! assert!(!form.validate_all());
//! assert!(form.error("baseId").is_some());
//!
//! form.on_change("baseId", "FT_BRAGG");
//! assert!(form.validate_all());
//! ```
//!
//! ## Architecture
//!
//! - [`Rule`] - constraints on one field, evaluated in a fixed order
//! - [`Schema`] - ordered field-name to rule mapping and its evaluator
//! - [`FormController`] - per-form values, errors and touched flags
//! - [`FormsConfig`] - schemas declared in `forms.toml`
//!
//! Single-value predicates live in `asset-forms-validation`, re-exported
//! here as [`validation`].

pub mod builtin;
pub mod config;
pub mod error;
pub mod form;
pub mod rule;
pub mod schema;

pub use asset_forms_validation as validation;
pub use asset_forms_validation::FieldValue;

pub use builtin::{
    builtin_schema, login_schema, purchase_schema, register_schema, BASE_COMMANDER_ROLE,
    BUILTIN_FORMS,
};
pub use config::{Condition, FieldDefinition, FormDefinition, FormsConfig};
pub use error::SchemaError;
pub use form::{FormController, FormState};
pub use rule::{Check, Requirement, Rule, Validator};
pub use schema::{evaluate_schema, record, FormRecord, Schema, ValidationResult};
