//! Phone number normalization to E.164 without asking for a country.
//!
//! This library turns whatever a user typed into a phone field into an
//! international `+<digits>` string. The country is worked out through a
//! layered fallback chain instead of a country picker.
//!
//! # Features
//!
//! - **Embedded Calling Codes**: Recognizes `63...`, `44...`, `971...` at the
//!   start of the digits, longest codes first
//! - **Device Location**: Optional injected resolver supplies the current
//!   country; every failure is absorbed
//! - **Digit Heuristics**: 10-digit Philippine mobile and North American guesses
//! - **Configurable Fallback**: Default calling code for everything else
//! - **Validation and Display**: E.164 grammar check and display grouping
//!
//! # Architecture
//!
//! - [`domain`]: Calling code tables, detection, validation, display
//! - [`location`]: Location capability traits and resolvers
//! - [`normalizer`]: The fallback chain
//! - [`config`]: Normalizer configuration
//! - [`error`]: Construction errors
//!
//! # Quick Start
//!
//! ```
//! use phonenorm::{PhoneNormalizer, NormalizerConfig};
//!
//! let normalizer = PhoneNormalizer::offline(NormalizerConfig::default());
//! let result = normalizer.normalize_sync("(555) 123-4567");
//! assert_eq!(result.value, "+15551234567");
//! ```
//!
//! # Examples
//!
//! ## With a Location Source
//!
//! ```
//! use phonenorm::{FixedCountry, IsoCountryCode, NormalizerConfig, PhoneNormalizer};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = FixedCountry::new(IsoCountryCode::parse("GB")?);
//! let normalizer = PhoneNormalizer::new(resolver, NormalizerConfig::default());
//!
//! assert_eq!(normalizer.normalize("020 7946 0958").await, "+4402079460958");
//! # Ok(())
//! # }
//! ```
//!
//! ## Validation and Display
//!
//! ```
//! use phonenorm::{format_for_display, is_valid_international_phone};
//!
//! assert!(is_valid_international_phone("+15551234567"));
//! assert!(!is_valid_international_phone("+0123456789"));
//! assert_eq!(format_for_display("+15551234567"), "+1 (555) 123-4567");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod location;
pub mod normalizer;

// Re-exports for convenient access
pub use config::NormalizerConfig;
pub use domain::{
    CallingCode, CallingCodeRule, CallingCodeTable, DisplayFormatter, E164Validator,
    IsoCountryCode,
};
pub use error::{PhoneError, PhoneResult};
pub use location::{
    DeviceLocationResolver, FixedCountry, LocationError, LocationPlatform, LocationResolver,
    NoLocation,
};
pub use normalizer::{Normalized, PhoneNormalizer, Stage};

/// Normalizes `raw` with default configuration and the given location source.
pub async fn normalize_to_international<R: LocationResolver>(raw: &str, resolver: R) -> String {
    PhoneNormalizer::new(resolver, NormalizerConfig::default())
        .normalize(raw)
        .await
}

/// Whether `s` is a strict E.164 number.
pub fn is_valid_international_phone(s: &str) -> bool {
    E164Validator::is_valid(s)
}

/// Calling code embedded at the start of `raw`'s digits, as `+<code>`.
///
/// Synchronous and location-free, for as-you-type hints.
pub fn detect_calling_code_embedded(raw: &str) -> Option<String> {
    CallingCodeTable::builtin()
        .detect(&domain::digits_only(raw))
        .map(|code| code.to_string())
}

/// Groups a normalized number for display.
pub fn format_for_display(e164: &str) -> String {
    DisplayFormatter::for_display(e164)
}
