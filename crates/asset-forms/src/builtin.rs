// File: src/builtin.rs
// Purpose: Schemas for the login, registration and purchase forms

use crate::rule::{Requirement, Rule, Validator};
use crate::schema::Schema;

/// Names accepted by [`builtin_schema`]
pub const BUILTIN_FORMS: &[&str] = &["login", "register", "purchase"];

/// Role whose accounts are bound to a single base
pub const BASE_COMMANDER_ROLE: &str = "base_commander";

const EMAIL_MESSAGE: &str = "Please enter a valid email address";
const BASE_ID_MESSAGE: &str = "Base ID must be 3-15 characters (A-Z, 0-9, _)";

pub fn builtin_schema(name: &str) -> Option<Schema> {
    match name {
        "login" => Some(login_schema()),
        "register" => Some(register_schema()),
        "purchase" => Some(purchase_schema()),
        _ => None,
    }
}

pub fn login_schema() -> Schema {
    Schema::new()
        .field("email", email_rule())
        .field(
            "password",
            Rule::new().required().message("Password is required"),
        )
}

/// Registration; `baseId` is only required for base commanders
pub fn register_schema() -> Schema {
    Schema::new()
        .field(
            "username",
            Rule::new()
                .required()
                .min_length(3)
                .max_length(20)
                .message("Username must be 3-20 characters"),
        )
        .field("email", email_rule())
        .field(
            "password",
            Rule::new()
                .required()
                .pattern(Validator::Password)
                .message(
                    "Password must be at least 8 characters with uppercase, lowercase, and number",
                ),
        )
        .field("role", Rule::new().required().message("Role is required"))
        .field(
            "baseId",
            Rule::new()
                .requirement_of(Requirement::when_equals("role", BASE_COMMANDER_ROLE))
                .pattern(Validator::BaseId)
                .message(BASE_ID_MESSAGE),
        )
}

/// Asset purchase recorded against a base
pub fn purchase_schema() -> Schema {
    Schema::new()
        .field(
            "assetId",
            Rule::new()
                .required()
                .pattern(Validator::AssetId)
                .message("Asset ID must be 3-20 characters (A-Z, 0-9, -)"),
        )
        .field(
            "assetName",
            Rule::new()
                .required()
                .min_length(2)
                .max_length(100)
                .message("Asset name must be 2-100 characters"),
        )
        .field(
            "assetType",
            Rule::new().required().message("Asset type is required"),
        )
        .field(
            "baseId",
            Rule::new()
                .required()
                .pattern(Validator::BaseId)
                .message(BASE_ID_MESSAGE),
        )
        .field(
            "quantity",
            Rule::new()
                .required()
                .pattern(Validator::Number {
                    min: Some(1.0),
                    max: None,
                })
                .message("Quantity must be a positive number"),
        )
        .field(
            "unitPrice",
            Rule::new()
                .required()
                .pattern(Validator::Number {
                    min: Some(0.0),
                    max: None,
                })
                .message("Unit price must be a non-negative number"),
        )
        .field(
            "vendor",
            Rule::new()
                .required()
                .min_length(2)
                .max_length(100)
                .message("Vendor name must be 2-100 characters"),
        )
}

fn email_rule() -> Rule {
    Rule::new()
        .required()
        .pattern(Validator::Email)
        .message(EMAIL_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_resolves() {
        for name in BUILTIN_FORMS {
            assert!(builtin_schema(name).is_some(), "missing builtin {}", name);
        }
        assert!(builtin_schema("transfer").is_none());
    }

    #[test]
    fn test_field_order() {
        let fields: Vec<_> = register_schema().fields().map(str::to_string).collect();
        assert_eq!(fields, ["username", "email", "password", "role", "baseId"]);
        assert_eq!(purchase_schema().len(), 7);
    }
}
