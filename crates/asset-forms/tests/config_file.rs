/// The forms.toml shipped at the workspace root must build cleanly

use asset_forms::{record, FieldValue, FormController, FormsConfig};

const SHIPPED_CONFIG: &str = include_str!("../../../forms.toml");

#[test]
fn test_shipped_config_builds_every_form() {
    let config = FormsConfig::parse(SHIPPED_CONFIG).unwrap();
    let schemas = config.schemas().unwrap();

    let names: Vec<_> = schemas.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["transfer", "assignment"]);
}

#[test]
fn test_transfer_form_round_trip() {
    let config = FormsConfig::parse(SHIPPED_CONFIG).unwrap();
    let schema = config.resolve("transfer").unwrap();

    let mut form = FormController::new(
        record([
            ("assetId", ""),
            ("assetName", ""),
            ("fromBaseId", ""),
            ("toBaseId", ""),
            ("reason", ""),
        ]),
        schema,
    );
    assert!(!form.validate_all());
    assert_eq!(form.errors().len(), 5);
    // reason is optional
    assert_eq!(form.error("reason"), None);

    form.on_change("assetId", "M777-0031");
    form.on_change("assetName", "M777 Howitzer");
    form.on_change("fromBaseId", "FT_SILL");
    form.on_change("toBaseId", "FT_CARSON");
    form.on_change("quantity", FieldValue::from(2));
    assert!(form.validate_all());
}

#[test]
fn test_builtins_still_resolve_alongside_config() {
    let config = FormsConfig::parse(SHIPPED_CONFIG).unwrap();
    assert!(config.resolve("login").is_ok());
    assert!(config.resolve("register").is_ok());
}
