//! E.164 grammar check.

use once_cell::sync::Lazy;
use regex::Regex;

/// E.164 validator: `+`, a non-zero digit, then 1-14 more digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct E164Validator;

impl E164Validator {
    /// Returns the compiled E.164 pattern.
    ///
    /// Uses `[0-9]` rather than `\d`, which would also admit non-ASCII digits.
    pub fn pattern() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\+[1-9][0-9]{1,14}$").expect("Valid E.164 regex"));
        &PATTERN
    }

    pub fn is_valid(s: &str) -> bool {
        Self::pattern().is_match(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(E164Validator::is_valid("+15551234567"));
        assert!(E164Validator::is_valid("+639171234567"));
        assert!(E164Validator::is_valid("+12"));
        assert!(E164Validator::is_valid("+123456789012345"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!E164Validator::is_valid(""));
        assert!(!E164Validator::is_valid("+"));
        assert!(!E164Validator::is_valid("+1"));
        assert!(!E164Validator::is_valid("+0123456789"));
        assert!(!E164Validator::is_valid("+1234567890123456"));
        assert!(!E164Validator::is_valid("15551234567"));
        assert!(!E164Validator::is_valid("+44 20 7946 0958"));
        assert!(!E164Validator::is_valid("+1555123456\n"));
        assert!(!E164Validator::is_valid("+١٢٣٤٥٦"));
    }
}
