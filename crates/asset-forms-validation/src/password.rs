//! Password validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

// Whole-body character set: letters, digits and @$!%*?&
static PASSWORD_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9@$!%*?&]+$").expect("password pattern compiles"));

/// Validates password strength, reporting the first unmet requirement.
///
/// A password passes when it:
/// - is at least 8 characters long
/// - only uses letters, digits and the symbols `@ $ ! % * ? &`
/// - contains an ASCII lowercase letter, an ASCII uppercase letter and a digit
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }

    if !PASSWORD_CHARSET.is_match(password) {
        return Err("Password may only contain letters, digits and @$!%*?&".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }

    Ok(())
}

/// True when [`validate_password`] accepts the password.
pub fn is_valid_password(password: &str) -> bool {
    validate_password(password).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Abcdefg1")]
    #[case("Password123")]
    #[case("Secure@Pass1")]
    #[case("A1b2C3d4&?")]
    fn test_accepts_strong_passwords(#[case] password: &str) {
        assert!(is_valid_password(password));
    }

    #[rstest]
    #[case("abcdefg1")] // no uppercase
    #[case("ABCDEFG1")] // no lowercase
    #[case("Abcdefgh")] // no digit
    #[case("Abc123")] // too short
    #[case("Abcdefg1#")] // '#' is outside the allowed set
    #[case("Abcd efg1")] // whitespace
    #[case("")]
    fn test_rejects_weak_passwords(#[case] password: &str) {
        assert!(!is_valid_password(password));
    }

    #[test]
    fn test_reports_first_unmet_requirement() {
        assert_eq!(
            validate_password("Abc123").unwrap_err(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            validate_password("abcdefg1").unwrap_err(),
            "Password must contain at least one uppercase letter"
        );
        assert_eq!(
            validate_password("Abcdefg1~").unwrap_err(),
            "Password may only contain letters, digits and @$!%*?&"
        );
    }
}
