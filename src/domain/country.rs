//! ISO country codes and their calling codes.
//!
//! Used only by the location stage: a reverse-geocoded ISO code is mapped
//! to the calling code prepended to the caller's digits.

use crate::error::{PhoneError, PhoneResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// ISO 3166-1 alpha-2 country code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsoCountryCode(String);

impl IsoCountryCode {
    /// Parses a 2-letter code, case-insensitively.
    pub fn parse(code: &str) -> PhoneResult<Self> {
        let trimmed = code.trim();
        if trimmed.len() != 2 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(PhoneError::country_code(code, "expected two ASCII letters"));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IsoCountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for IsoCountryCode {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

const ISO_CALLING_CODES: &[(&str, &str)] = &[
    ("US", "1"),
    ("CA", "1"),
    ("PH", "63"),
    ("GB", "44"),
    ("AU", "61"),
    ("SG", "65"),
    ("MY", "60"),
    ("ID", "62"),
    ("TH", "66"),
    ("VN", "84"),
    ("JP", "81"),
    ("KR", "82"),
    ("CN", "86"),
    ("IN", "91"),
    ("DE", "49"),
    ("FR", "33"),
    ("ES", "34"),
    ("IT", "39"),
    ("MX", "52"),
    ("BR", "55"),
    ("NZ", "64"),
    ("ZA", "27"),
    ("AE", "971"),
    ("SA", "966"),
    ("QA", "974"),
    ("KW", "965"),
    ("BH", "973"),
    ("OM", "968"),
    ("HK", "852"),
    ("TW", "886"),
    ("BD", "880"),
    ("NG", "234"),
    ("KE", "254"),
    ("IE", "353"),
    ("PT", "351"),
    ("RU", "7"),
    ("KZ", "7"),
];

static ISO_TO_CALLING_CODE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ISO_CALLING_CODES.iter().copied().collect());

/// Calling code digits (no `+`) for a country, if the table knows it.
pub fn calling_code_for(iso: &IsoCountryCode) -> Option<&'static str> {
    ISO_TO_CALLING_CODE.get(iso.as_str()).copied()
}

/// Every `(iso, calling code)` pair in the table.
pub fn iso_calling_codes() -> &'static [(&'static str, &'static str)] {
    ISO_CALLING_CODES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_iso_parse_uppercases() {
        assert_eq!(IsoCountryCode::parse("ph").unwrap().as_str(), "PH");
        assert!(IsoCountryCode::parse("PHL").is_err());
        assert!(IsoCountryCode::parse("1A").is_err());
        assert!(IsoCountryCode::parse("").is_err());
    }

    #[test]
    fn test_calling_code_for() {
        let ph = IsoCountryCode::parse("PH").unwrap();
        assert_eq!(calling_code_for(&ph), Some("63"));
        let ae = IsoCountryCode::parse("ae").unwrap();
        assert_eq!(calling_code_for(&ae), Some("971"));
        let aq = IsoCountryCode::parse("AQ").unwrap();
        assert_eq!(calling_code_for(&aq), None);
    }

    #[test]
    fn test_iso_keys_unique() {
        let keys: HashSet<_> = ISO_CALLING_CODES.iter().map(|(iso, _)| *iso).collect();
        assert_eq!(keys.len(), ISO_CALLING_CODES.len());
    }
}
