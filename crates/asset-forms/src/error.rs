// File: src/error.rs
// Purpose: Errors raised while building schemas from form definitions

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("Unknown form: {0}")]
    UnknownForm(String),

    #[error("Form '{0}' is defined more than once")]
    DuplicateForm(String),

    #[error("Field '{field}' is defined more than once in form '{form}'")]
    DuplicateField { form: String, field: String },

    #[error("Unknown validator '{validator}' on field '{form}.{field}'")]
    UnknownValidator {
        form: String,
        field: String,
        validator: String,
    },

    #[error("Field '{form}.{field}' sets both 'required' and 'required_when'")]
    ConflictingRequirement { form: String, field: String },

    #[error("Field '{form}.{field}' has min {min} greater than max {max}")]
    InvertedBounds {
        form: String,
        field: String,
        min: f64,
        max: f64,
    },

    #[error("Field '{form}.{field}' sets numeric bounds without the 'number' validator")]
    BoundsWithoutNumber { form: String, field: String },
}
