//! Domain models and pure phone-number logic.
//!
//! Everything here is synchronous and side-effect free: the calling code
//! tables, embedded-code detection, E.164 validation and display grouping.

pub mod calling_code;
pub mod country;
pub mod display;
pub mod validation;

pub use calling_code::{CallingCode, CallingCodeRule, CallingCodeTable, EmbeddedMatch};
pub use country::{calling_code_for, iso_calling_codes, IsoCountryCode};
pub use display::DisplayFormatter;
pub use validation::E164Validator;

/// Keeps only the ASCII digits `0`-`9` of `raw`.
///
/// Other Unicode digit characters are dropped, so the result is always safe
/// to splice into an E.164 string.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
