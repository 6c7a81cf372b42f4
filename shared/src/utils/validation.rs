//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex is valid")
});

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Check if a string is not empty after trimming
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string's character count is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Loose email shape check: `local@domain.tld` without whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Lower-case and trim an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello"));
        assert!(!not_blank("   "));
        assert!(!not_blank(""));
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("abcdef", 6, 128));
        assert!(!length_between("abc", 6, 128));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("parent@example.com"));
        assert!(!is_valid_email("parent@example"));
        assert!(!is_valid_email("par ent@example.com"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Parent@Example.COM "), "parent@example.com");
    }
}
