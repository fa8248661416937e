//! Local validation rules

use std::sync::OnceLock;

use regex::Regex;

use super::{ErrorKey, ErrorMap, FormValues};
use crate::i18n::Messages;

/// Minimum trimmed length for name and message, in UTF-16 code units
const MIN_TEXT_LEN: usize = 2;

/// Belarusian mobile number: +375 or 80 followed by nine digits
const PHONE_PATTERN: &str = r"^(\+375|80)[0-9]{9}$";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"))
}

/// Strip surrounding whitespace, including the byte order mark
fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Check a phone number (surrounding whitespace is ignored)
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(trim_input(phone))
}

/// Length is measured in UTF-16 code units, so one astral-plane character counts as two
fn is_long_enough(text: &str) -> bool {
    trim_input(text).encode_utf16().count() >= MIN_TEXT_LEN
}

/// Validate form values, returning only the fields that fail.
///
/// An empty map means the values pass local validation.
pub fn validate(values: &FormValues, messages: &Messages) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if !is_long_enough(&values.name) {
        errors.insert(ErrorKey::Name, messages.name_too_short);
    }
    if !is_valid_phone(&values.phone) {
        errors.insert(ErrorKey::Phone, messages.phone_invalid);
    }
    if !is_long_enough(&values.message) {
        errors.insert(ErrorKey::Message, messages.message_too_short);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::EN;

    #[test]
    fn test_valid_input_has_no_errors() {
        let values = FormValues::new("Al", "+375291234567", "Hi there");
        assert!(validate(&values, &EN).is_empty());
    }

    #[test]
    fn test_all_fields_invalid() {
        let values = FormValues::new("A", "12345", "");
        let errors = validate(&values, &EN);

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(ErrorKey::Name), Some(EN.name_too_short));
        assert_eq!(errors.get(ErrorKey::Phone), Some(EN.phone_invalid));
        assert_eq!(errors.get(ErrorKey::Message), Some(EN.message_too_short));
        assert!(!errors.contains(ErrorKey::Submit));
    }

    #[test]
    fn test_phone_formats() {
        assert!(is_valid_phone("+375291234567"));
        assert!(is_valid_phone("80291234567"));
        assert!(is_valid_phone("  80291234567 "));

        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("375291234567"));
        assert!(!is_valid_phone("+37529123456"));
        assert!(!is_valid_phone("+3752912345678"));
        assert!(!is_valid_phone("8029123456"));
        assert!(!is_valid_phone("+375 29 123 45 67"));
        assert!(!is_valid_phone("+37529123456a"));
        assert!(!is_valid_phone("+7291234567"));
        // Non-ASCII digits are rejected
        assert!(!is_valid_phone("+375٢٩١٢٣٤٥٦٧"));
    }

    #[test]
    fn test_trimmed_length() {
        let values = FormValues::new("  A  ", "80291234567", " \t ");
        let errors = validate(&values, &EN);
        assert!(errors.contains(ErrorKey::Name));
        assert!(errors.contains(ErrorKey::Message));
        assert!(!errors.contains(ErrorKey::Phone));

        // Length counts UTF-16 code units, not bytes
        let values = FormValues::new("Ян", "80291234567", "Ок");
        assert!(validate(&values, &EN).is_empty());

        let values = FormValues::new("Я", "80291234567", "Ок");
        assert!(validate(&values, &EN).contains(ErrorKey::Name));
    }

    #[test]
    fn test_astral_characters_count_twice() {
        let values = FormValues::new("\u{1F600}", "80291234567", "\u{1F44D}");
        assert!(validate(&values, &EN).is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let values = FormValues::new("\u{FEFF}A\u{FEFF}", "\u{FEFF}80291234567", "Hi");
        let errors = validate(&values, &EN);
        assert!(errors.contains(ErrorKey::Name));
        assert!(!errors.contains(ErrorKey::Phone));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let values = FormValues::new("A", "+375291234567", "x");
        assert_eq!(validate(&values, &EN), validate(&values, &EN));
    }
}
