//! Error types for the phone normalization library.
//!
//! Normalization itself never fails. Errors only arise when building the
//! typed values and configuration the normalizer is constructed from.

use thiserror::Error;

/// Result type alias for fallible construction.
pub type PhoneResult<T> = Result<T, PhoneError>;

/// Errors raised while constructing calling codes, country codes or configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// A calling code was not 1-3 ASCII digits with a non-zero lead digit
    #[error("Invalid calling code '{code}': {reason}")]
    InvalidCallingCode { code: String, reason: String },

    /// An ISO 3166-1 alpha-2 code was malformed
    #[error("Invalid ISO country code '{code}': {reason}")]
    InvalidCountryCode { code: String, reason: String },

    /// A configuration value was present but unusable
    #[error("Invalid configuration for '{key}': {reason}")]
    Config { key: String, reason: String },
}

impl PhoneError {
    pub(crate) fn calling_code(code: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCallingCode {
            code: code.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn country_code(code: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCountryCode {
            code: code.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn config(key: &str, reason: impl Into<String>) -> Self {
        Self::Config {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
