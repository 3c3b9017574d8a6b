//! RUT (Chilean national ID) formatting and validation.
//!
//! A RUT is written `NNNNNNNN-C` where the body is 7 or 8 digits and `C` is
//! a modulo-11 check character (`0`-`9` or `k`).

use std::sync::LazyLock;

use regex::Regex;

/// Canonical RUT shape: 7-8 digit body, hyphen, check character.
static RUT_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{7,8}-[\dkK]$").expect("RUT regex must compile"));

/// Normalize raw input into `"{body}-{check}"` form.
///
/// Strips every character except digits and `k`/`K`, then:
/// - empty input yields an empty string;
/// - a single remaining character is returned unmodified;
/// - otherwise the input is truncated to 9 characters, the last character
///   becomes the lowercased check character, and the rest the body.
///
/// # Examples
///
/// ```
/// use clinica_core::rut::format_rut;
///
/// assert_eq!(format_rut("175391389"), "17539138-9");
/// assert_eq!(format_rut("17.539.138-9"), "17539138-9");
/// assert_eq!(format_rut(""), "");
/// assert_eq!(format_rut("1"), "1");
/// ```
pub fn format_rut(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k' || *c == 'K')
        .collect();

    if cleaned.is_empty() {
        return String::new();
    }
    if cleaned.len() == 1 {
        return cleaned;
    }

    let truncated = &cleaned[..cleaned.len().min(9)];
    let (body, check) = truncated.split_at(truncated.len() - 1);
    format!("{body}-{}", check.to_lowercase())
}

/// Check that a string has the canonical RUT shape (`^\d{7,8}-[\dkK]$`).
///
/// This checks format only, not the check digit; see [`is_valid_rut`] for
/// full validation.
pub fn is_valid_rut_format(rut: &str) -> bool {
    RUT_FORMAT.is_match(rut)
}

/// Compute the modulo-11 check character for a numeric RUT body.
///
/// Returns `None` if the body contains non-digit characters.
pub fn check_digit(body: &str) -> Option<char> {
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut factor = 2u32;
    let mut sum = 0u32;
    for c in body.chars().rev() {
        sum += c.to_digit(10)? * factor;
        factor = if factor == 7 { 2 } else { factor + 1 };
    }

    Some(match 11 - (sum % 11) {
        11 => '0',
        10 => 'k',
        n => char::from_digit(n, 10)?,
    })
}

/// Full RUT validation: canonical format and a matching check digit.
pub fn is_valid_rut(rut: &str) -> bool {
    if !is_valid_rut_format(rut) {
        return false;
    }
    let (body, check) = rut.split_once('-').expect("format match implies hyphen");
    let given = check
        .chars()
        .next()
        .expect("format match implies check char")
        .to_ascii_lowercase();
    check_digit(body) == Some(given)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_plain_digits() {
        assert_eq!(format_rut("175391389"), "17539138-9");
    }

    #[test]
    fn format_empty() {
        assert_eq!(format_rut(""), "");
    }

    #[test]
    fn format_single_char() {
        assert_eq!(format_rut("1"), "1");
        assert_eq!(format_rut("K"), "K");
    }

    #[test]
    fn format_strips_punctuation() {
        assert_eq!(format_rut("17.539.138-9"), "17539138-9");
        assert_eq!(format_rut(" 7 654 321 - k "), "7654321-k");
    }

    #[test]
    fn format_lowercases_check_char() {
        assert_eq!(format_rut("7654321K"), "7654321-k");
    }

    #[test]
    fn format_truncates_to_nine() {
        assert_eq!(format_rut("1234567890"), "12345678-9");
    }

    #[test]
    fn format_idempotent_on_valid_input() {
        for rut in ["17539138-9", "7654321-k", "12345678-5"] {
            assert_eq!(format_rut(rut), rut, "format_rut must be stable on {rut}");
        }
    }

    #[test]
    fn valid_format_accepts_both_check_cases() {
        assert!(is_valid_rut_format("17539138-k"));
        assert!(is_valid_rut_format("17539138-K"));
        assert!(is_valid_rut_format("1753913-8"));
    }

    #[test]
    fn valid_format_requires_hyphen() {
        assert!(!is_valid_rut_format("17539138k"));
        assert!(!is_valid_rut_format("175391389"));
    }

    #[test]
    fn valid_format_rejects_short_and_long_bodies() {
        assert!(!is_valid_rut_format("123456-7"));
        assert!(!is_valid_rut_format("123456789-0"));
        assert!(!is_valid_rut_format(""));
    }

    #[test]
    fn check_digit_known_values() {
        assert_eq!(check_digit("17539138"), Some('k'));
        assert_eq!(check_digit("12345678"), Some('5'));
        assert_eq!(check_digit("7654321"), Some('6'));
    }

    #[test]
    fn check_digit_rejects_non_numeric() {
        assert_eq!(check_digit("1234a678"), None);
        assert_eq!(check_digit(""), None);
    }

    #[test]
    fn full_validation_requires_matching_check() {
        assert!(is_valid_rut("17539138-k"));
        assert!(is_valid_rut("17539138-K"));
        assert!(is_valid_rut("12345678-5"));
        assert!(!is_valid_rut("17539138-9"));
        assert!(!is_valid_rut("12345678-k"));
    }
}
