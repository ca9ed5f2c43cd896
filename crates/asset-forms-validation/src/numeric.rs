//! Numeric validation functions

use crate::value::FieldValue;

/// Converts a field value to a finite number.
///
/// Text is trimmed first and blank text converts to `0`, matching the
/// browser's numeric coercion. Unsigned `0x`, `0b` and `0o` literals are
/// accepted too. `NaN` and infinities are rejected.
pub fn to_number(value: &FieldValue) -> Option<f64> {
    let n = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else if let Some(n) = parse_radix_literal(trimmed) {
                n
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
    };

    n.is_finite().then_some(n)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0b" => 2,
        "0o" => 8,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }

    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| c.to_digit(radix).map(|d| acc * radix as f64 + d as f64))
}

/// Validates that the value is a finite number within optional inclusive bounds
pub fn is_valid_number(value: &FieldValue, min: Option<f64>, max: Option<f64>) -> bool {
    let Some(n) = to_number(value) else {
        return false;
    };

    if min.is_some_and(|min| n < min) {
        return false;
    }
    if max.is_some_and(|max| n > max) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion() {
        assert_eq!(to_number(&FieldValue::from("12")), Some(12.0));
        assert_eq!(to_number(&FieldValue::from(" 4.5 ")), Some(4.5));
        assert_eq!(to_number(&FieldValue::from("1e3")), Some(1000.0));
        assert_eq!(to_number(&FieldValue::from("")), Some(0.0));
        assert_eq!(to_number(&FieldValue::from(7)), Some(7.0));

        assert_eq!(to_number(&FieldValue::from("abc")), None);
        assert_eq!(to_number(&FieldValue::from("12abc")), None);
        assert_eq!(to_number(&FieldValue::from("inf")), None);
        assert_eq!(to_number(&FieldValue::from(f64::NAN)), None);
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(to_number(&FieldValue::from("0x10")), Some(16.0));
        assert_eq!(to_number(&FieldValue::from("0XfF")), Some(255.0));
        assert_eq!(to_number(&FieldValue::from("0b11")), Some(3.0));
        assert_eq!(to_number(&FieldValue::from(" 0o7 ")), Some(7.0));

        assert_eq!(to_number(&FieldValue::from("0x")), None);
        assert_eq!(to_number(&FieldValue::from("0b12")), None);
        assert_eq!(to_number(&FieldValue::from("0x+1")), None);
        assert_eq!(to_number(&FieldValue::from("-0x10")), None);

        assert!(is_valid_number(&FieldValue::from("0x10"), Some(1.0), None));
    }

    #[test]
    fn test_min_validation() {
        assert!(is_valid_number(&FieldValue::from("1"), Some(1.0), None));
        assert!(is_valid_number(&FieldValue::from("250"), Some(1.0), None));
        assert!(!is_valid_number(&FieldValue::from("0"), Some(1.0), None));
        assert!(!is_valid_number(&FieldValue::from("-0.01"), Some(0.0), None));
    }

    #[test]
    fn test_range_validation() {
        assert!(is_valid_number(&FieldValue::from(5), Some(1.0), Some(10.0)));
        assert!(is_valid_number(&FieldValue::from(10), Some(1.0), Some(10.0)));
        assert!(!is_valid_number(&FieldValue::from(11), Some(1.0), Some(10.0)));
        assert!(is_valid_number(&FieldValue::from("-40"), None, None));
        assert!(!is_valid_number(&FieldValue::from("ten"), None, None));
    }
}
