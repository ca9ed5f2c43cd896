//! Asset and base identifier formats

use once_cell::sync::Lazy;
use regex::Regex;

static ASSET_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9-]{3,20}$").expect("asset id pattern compiles"));

static BASE_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9_]{3,15}$").expect("base id pattern compiles"));

/// Asset IDs: 3-20 upper-case letters, digits or hyphens (e.g. `M1A2-0042`)
pub fn is_valid_asset_id(asset_id: &str) -> bool {
    ASSET_ID_REGEX.is_match(asset_id)
}

/// Base IDs: 3-15 upper-case letters, digits or underscores (e.g. `FT_BRAGG`)
pub fn is_valid_base_id(base_id: &str) -> bool {
    BASE_ID_REGEX.is_match(base_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("AB-123", true)]
    #[case("ABC", true)]
    #[case("M1A2-ABRAMS-0042", true)]
    #[case("ab-123", false)]
    #[case("AB", false)]
    #[case("AB_123", false)]
    #[case("ABCDEFGHIJ-123456789", true)]
    #[case("ABCDEFGHIJ-1234567890", false)]
    fn test_asset_ids(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(is_valid_asset_id(id), expected);
    }

    #[rstest]
    #[case("FT_BRAGG", true)]
    #[case("HQ1", true)]
    #[case("ft_bragg", false)]
    #[case("HQ", false)]
    #[case("FT-BRAGG", false)]
    #[case("BASE_0123456789", true)]
    #[case("BASE_01234567890", false)]
    fn test_base_ids(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(is_valid_base_id(id), expected);
    }
}
