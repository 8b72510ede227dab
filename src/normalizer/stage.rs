//! The individual steps of the fallback chain.
//!
//! The async and sync normalizers differ only in whether the location step
//! runs between [`leading_steps`] and [`trailing_steps`]; everything else is
//! these functions.

use crate::domain::{
    calling_code_for, digits_only, CallingCode, CallingCodeTable, IsoCountryCode,
};
use crate::location::LocationError;
use std::fmt;
use std::ops::ControlFlow;

/// Which step of the chain produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Input had no digits
    Empty,
    /// Input already started with `+` and was returned verbatim
    Passthrough,
    /// A calling code was recognized at the start of the digits
    Embedded,
    /// Device location supplied the country
    Location,
    /// 10 digits starting with 9
    PhilippineMobile,
    /// 10 digits not starting with 0
    NorthAmerica,
    /// Digits already began with the fallback code
    FallbackPresent,
    /// Fallback code prepended
    Fallback,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Passthrough => "passthrough",
            Self::Embedded => "embedded",
            Self::Location => "location",
            Self::PhilippineMobile => "philippine-mobile",
            Self::NorthAmerica => "north-america",
            Self::FallbackPresent => "fallback-present",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized number and the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub value: String,
    pub stage: Stage,
}

impl Normalized {
    pub fn new(value: String, stage: Stage) -> Self {
        Self { value, stage }
    }

    pub fn empty() -> Self {
        Self::new(String::new(), Stage::Empty)
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

/// Steps 1-4: blank input, digit extraction, `+` passthrough and embedded
/// calling code detection.
///
/// Breaks with a finished result, or continues with the extracted digits.
pub(crate) fn leading_steps(raw: &str, table: &CallingCodeTable) -> ControlFlow<Normalized, String> {
    if raw.trim().is_empty() {
        return ControlFlow::Break(Normalized::empty());
    }

    let digits = digits_only(raw);
    if digits.is_empty() {
        return ControlFlow::Break(Normalized::empty());
    }

    // The original string, interior formatting included
    if raw.starts_with('+') {
        return ControlFlow::Break(Normalized::new(raw.to_string(), Stage::Passthrough));
    }

    if let Some(found) = table.split_embedded(&digits) {
        return ControlFlow::Break(Normalized::new(found.to_international(), Stage::Embedded));
    }

    ControlFlow::Continue(digits)
}

/// Step 5 once a country is known: prepend its calling code.
pub(crate) fn from_country(
    digits: &str,
    iso: &IsoCountryCode,
) -> Result<Normalized, LocationError> {
    calling_code_for(iso)
        .map(|code| Normalized::new(format!("+{}{}", code, digits), Stage::Location))
        .ok_or_else(|| LocationError::UnmappedIsoCode(iso.to_string()))
}

/// Step 6: digit-pattern guesses for 10-digit input.
pub(crate) fn heuristic(digits: &str) -> Option<Normalized> {
    if digits.len() != 10 {
        return None;
    }

    if digits.starts_with('9') {
        Some(Normalized::new(format!("+63{}", digits), Stage::PhilippineMobile))
    } else if !digits.starts_with('0') {
        Some(Normalized::new(format!("+1{}", digits), Stage::NorthAmerica))
    } else {
        None
    }
}

/// Steps 7-8: apply the fallback code unless the digits already carry it.
pub(crate) fn apply_fallback(digits: &str, fallback: &CallingCode) -> Normalized {
    if digits.starts_with(fallback.digits()) {
        Normalized::new(format!("+{}", digits), Stage::FallbackPresent)
    } else {
        Normalized::new(format!("{}{}", fallback, digits), Stage::Fallback)
    }
}

/// Steps 6-8.
pub(crate) fn trailing_steps(digits: &str, fallback: &CallingCode) -> Normalized {
    heuristic(digits).unwrap_or_else(|| apply_fallback(digits, fallback))
}
