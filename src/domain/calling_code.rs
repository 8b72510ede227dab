//! Calling code domain logic.
//!
//! This module owns the ordered calling code table and the digit-sequence
//! detector that recognizes a calling code embedded at the start of a
//! digits-only string.

use crate::error::{PhoneError, PhoneResult};
use once_cell::sync::Lazy;
use std::fmt;

/// An international calling code such as `1`, `44` or `971`.
///
/// Always 1-3 ASCII digits with a non-zero lead digit. Displays with a
/// leading `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallingCode(String);

impl CallingCode {
    /// Parses `"+63"` or `"63"` into a calling code.
    pub fn parse(code: &str) -> PhoneResult<Self> {
        let trimmed = code.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

        if digits.is_empty() || digits.len() > 3 {
            return Err(PhoneError::calling_code(code, "expected 1-3 digits"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhoneError::calling_code(code, "only digits 0-9 are allowed"));
        }
        if digits.starts_with('0') {
            return Err(PhoneError::calling_code(code, "leading digit must be 1-9"));
        }

        Ok(Self(digits.to_string()))
    }

    /// The digits of the code, without the `+`.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The code rendered with its `+` prefix.
    pub fn to_prefix(&self) -> String {
        format!("+{}", self.0)
    }
}

impl fmt::Display for CallingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

impl std::str::FromStr for CallingCode {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Default for CallingCode {
    fn default() -> Self {
        Self("1".to_string())
    }
}

/// One row of the calling code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallingCodeRule {
    /// Calling code digits, 1-3 long
    pub digits: &'static str,

    /// Typical length of the national number that follows the code
    pub national_len: usize,

    /// Human-readable region name
    pub name: &'static str,
}

impl CallingCodeRule {
    pub const fn new(digits: &'static str, national_len: usize, name: &'static str) -> Self {
        Self {
            digits,
            national_len,
            name,
        }
    }

    /// Returns the national part of `digits` if this rule is a prefix of it
    /// and the remainder is within one digit of the expected national length.
    pub fn accept<'a>(&self, digits: &'a str) -> Option<&'a str> {
        let national = digits.strip_prefix(self.digits)?;
        let min = self.national_len.saturating_sub(1);
        let max = self.national_len + 1;
        (min..=max).contains(&national.len()).then_some(national)
    }

    /// The rule's calling code as a typed value.
    pub fn calling_code(&self) -> CallingCode {
        CallingCode(self.digits.to_string())
    }
}

/// A calling code found at the start of a digit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedMatch<'a> {
    pub rule: &'a CallingCodeRule,
    pub national: &'a str,
}

impl EmbeddedMatch<'_> {
    /// Renders the match as `+<code><national>`.
    pub fn to_international(&self) -> String {
        format!("+{}{}", self.rule.digits, self.national)
    }
}

/// Built-in rules. 3-digit codes, then 2-digit, then 1-digit.
const BUILTIN_RULES: &[CallingCodeRule] = &[
    // 3-digit
    CallingCodeRule::new("971", 9, "United Arab Emirates"),
    CallingCodeRule::new("966", 9, "Saudi Arabia"),
    CallingCodeRule::new("974", 8, "Qatar"),
    CallingCodeRule::new("965", 8, "Kuwait"),
    CallingCodeRule::new("973", 8, "Bahrain"),
    CallingCodeRule::new("968", 8, "Oman"),
    CallingCodeRule::new("852", 8, "Hong Kong"),
    CallingCodeRule::new("886", 9, "Taiwan"),
    CallingCodeRule::new("880", 10, "Bangladesh"),
    CallingCodeRule::new("234", 10, "Nigeria"),
    CallingCodeRule::new("254", 9, "Kenya"),
    CallingCodeRule::new("353", 9, "Ireland"),
    CallingCodeRule::new("351", 9, "Portugal"),
    // 2-digit
    CallingCodeRule::new("63", 10, "Philippines"),
    CallingCodeRule::new("44", 10, "United Kingdom"),
    CallingCodeRule::new("61", 9, "Australia"),
    CallingCodeRule::new("65", 8, "Singapore"),
    CallingCodeRule::new("60", 9, "Malaysia"),
    CallingCodeRule::new("62", 10, "Indonesia"),
    CallingCodeRule::new("66", 9, "Thailand"),
    CallingCodeRule::new("84", 9, "Vietnam"),
    CallingCodeRule::new("81", 10, "Japan"),
    CallingCodeRule::new("82", 10, "South Korea"),
    CallingCodeRule::new("86", 11, "China"),
    CallingCodeRule::new("91", 10, "India"),
    CallingCodeRule::new("49", 11, "Germany"),
    CallingCodeRule::new("33", 9, "France"),
    CallingCodeRule::new("34", 9, "Spain"),
    CallingCodeRule::new("39", 10, "Italy"),
    CallingCodeRule::new("52", 10, "Mexico"),
    CallingCodeRule::new("55", 11, "Brazil"),
    CallingCodeRule::new("64", 9, "New Zealand"),
    CallingCodeRule::new("27", 9, "South Africa"),
    // 1-digit
    CallingCodeRule::new("1", 10, "United States/Canada"),
    CallingCodeRule::new("7", 10, "Russia/Kazakhstan"),
];

static BUILTIN: Lazy<CallingCodeTable> = Lazy::new(|| {
    CallingCodeTable::new(BUILTIN_RULES.to_vec()).expect("Valid built-in calling code table")
});

/// Ordered calling code table.
///
/// Rules are kept in declaration order and must be grouped by descending
/// code length, so a short code can never shadow a longer one during
/// detection. [`CallingCodeTable::new`] rejects tables that break this.
#[derive(Debug, Clone)]
pub struct CallingCodeTable {
    rules: Vec<CallingCodeRule>,
}

impl CallingCodeTable {
    /// Builds a table, validating every rule and the length ordering.
    pub fn new(rules: Vec<CallingCodeRule>) -> PhoneResult<Self> {
        let mut previous_len = usize::MAX;

        for (index, rule) in rules.iter().enumerate() {
            CallingCode::parse(rule.digits)?;

            if rule.digits.len() > previous_len {
                return Err(PhoneError::calling_code(
                    rule.digits,
                    format!(
                        "rule {} is longer than the rule before it; longer codes must come first",
                        index
                    ),
                ));
            }
            if rules[..index].iter().any(|r| r.digits == rule.digits) {
                return Err(PhoneError::calling_code(rule.digits, "duplicate rule"));
            }

            previous_len = rule.digits.len();
        }

        Ok(Self { rules })
    }

    /// The process-wide built-in table.
    pub fn builtin() -> &'static CallingCodeTable {
        &BUILTIN
    }

    /// Rules in scan order.
    pub fn rules(&self) -> &[CallingCodeRule] {
        &self.rules
    }

    /// Finds the rule registered for exactly these code digits.
    pub fn lookup(&self, digits: &str) -> Option<&CallingCodeRule> {
        let digits = digits.strip_prefix('+').unwrap_or(digits);
        self.rules.iter().find(|r| r.digits == digits)
    }

    /// Splits a digits-only string into calling code and national number.
    ///
    /// Scans rules in table order and returns the first whose code prefixes
    /// `digits` with a national remainder within one digit of the rule's
    /// expected length.
    pub fn split_embedded<'a>(&'a self, digits: &'a str) -> Option<EmbeddedMatch<'a>> {
        self.rules.iter().find_map(|rule| {
            rule.accept(digits)
                .map(|national| EmbeddedMatch { rule, national })
        })
    }

    /// Detects the calling code embedded at the start of `digits`.
    pub fn detect(&self, digits: &str) -> Option<CallingCode> {
        self.split_embedded(digits).map(|m| m.rule.calling_code())
    }
}
