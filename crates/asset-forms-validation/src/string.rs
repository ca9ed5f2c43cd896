//! Presence and length validation functions

use crate::value::FieldValue;

/// True when the value is present and its trimmed text form is not empty.
///
/// Numbers are converted to text first, so `0` counts as a value.
pub fn is_non_empty(value: Option<&FieldValue>) -> bool {
    match value {
        None => false,
        Some(FieldValue::Text(s)) => !s.trim().is_empty(),
        Some(number) => !number.to_text().trim().is_empty(),
    }
}

/// Validates minimum text length (inclusive)
pub fn validate_min_length(value: &FieldValue, min: usize) -> Result<(), String> {
    if value.text_len() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

/// Validates maximum text length (inclusive)
pub fn validate_max_length(value: &FieldValue, max: usize) -> Result<(), String> {
    if value.text_len() <= max {
        Ok(())
    } else {
        Err(format!("Must be no more than {} characters", max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_non_empty() {
        assert!(is_non_empty(Some(&FieldValue::from("x"))));
        assert!(is_non_empty(Some(&FieldValue::from(" x "))));
        assert!(is_non_empty(Some(&FieldValue::from(0))));

        assert!(!is_non_empty(None));
        assert!(!is_non_empty(Some(&FieldValue::from(""))));
        assert!(!is_non_empty(Some(&FieldValue::from("   \t"))));
    }

    #[test]
    fn test_length_validators() {
        let hello = FieldValue::from("hello");
        assert!(validate_min_length(&hello, 5).is_ok());
        assert!(validate_min_length(&hello, 6).is_err());

        assert!(validate_max_length(&hello, 5).is_ok());
        assert!(validate_max_length(&hello, 4).is_err());

        // untrimmed text is measured as typed
        assert!(validate_min_length(&FieldValue::from(" ab "), 4).is_ok());
    }

    // characters outside the BMP take two UTF-16 units each
    #[rstest]
    #[case("😀", 2, true)]
    #[case("😀", 3, false)]
    #[case("😀😀", 3, true)]
    #[case("a😀", 3, true)]
    fn test_min_length_astral(#[case] text: &str, #[case] min: usize, #[case] ok: bool) {
        assert_eq!(validate_min_length(&FieldValue::from(text), min).is_ok(), ok);
    }

    #[rstest]
    #[case("😀", 2, true)]
    #[case("😀", 1, false)]
    #[case("😀😀", 3, false)]
    #[case("a😀", 3, true)]
    fn test_max_length_astral(#[case] text: &str, #[case] max: usize, #[case] ok: bool) {
        assert_eq!(validate_max_length(&FieldValue::from(text), max).is_ok(), ok);
    }
}
