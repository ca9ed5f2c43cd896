//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld, no whitespace and no extra '@' in any segment
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Validates basic email shape: `local@domain.tld`.
///
/// No TLD length or IDN handling; the domain only needs one dot with
/// something on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
