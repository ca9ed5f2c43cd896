//! Asset Forms Validation
//!
//! Stateless predicates over single field values. The schema evaluator in
//! `asset-forms` composes these into per-field rules.

pub mod email;
pub mod identifiers;
pub mod numeric;
pub mod password;
pub mod string;
pub mod value;

// Re-export all validators
pub use email::*;
pub use identifiers::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
pub use value::FieldValue;
