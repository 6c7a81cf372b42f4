//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Indian mobile numbering plan: ten digits, leading 6-9
static INDIAN_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[6-9]\d{9}$").expect("static regex is valid")
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check whether `phone` is exactly a 10-digit Indian mobile number.
///
/// No normalization is applied; OTP challenges are keyed by the raw number.
pub fn is_valid_indian_mobile(phone: &str) -> bool {
    INDIAN_MOBILE_REGEX.is_match(phone)
}

/// Prefix a local number with the dialing code used by the SMS gateway
pub fn with_country_prefix(phone: &str, prefix: &str) -> String {
    if phone.starts_with('+') {
        phone.to_string()
    } else {
        format!("{}{}", prefix, phone)
    }
}

/// Mask a phone number for display and logs (e.g., 987****3210)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
