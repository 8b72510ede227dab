//! Normalizer configuration.
//!
//! Defaults match a North American deployment: `+1` fallback and a ten
//! second bound on the position fetch. Both can be overridden from the
//! environment.

use crate::domain::CallingCode;
use crate::error::{PhoneError, PhoneResult};
use crate::location::device::DEFAULT_LOCATION_TIMEOUT;
use std::time::Duration;

/// Environment variable holding the fallback calling code.
pub const ENV_FALLBACK_CODE: &str = "PHONENORM_FALLBACK_CODE";

/// Environment variable holding the position fetch timeout in milliseconds.
pub const ENV_LOCATION_TIMEOUT_MS: &str = "PHONENORM_LOCATION_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Calling code applied when nothing else identifies the country
    pub fallback: CallingCode,

    /// Upper bound on the device position fetch
    pub location_timeout: Duration,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            fallback: CallingCode::default(),
            location_timeout: DEFAULT_LOCATION_TIMEOUT,
        }
    }
}

impl NormalizerConfig {
    /// Default configuration with a different fallback code.
    pub fn with_fallback(code: &str) -> PhoneResult<Self> {
        Ok(Self {
            fallback: CallingCode::parse(code)?,
            ..Self::default()
        })
    }

    /// Reads overrides from the process environment.
    ///
    /// Unset or blank variables keep their defaults; present but malformed
    /// values are an error.
    pub fn from_env() -> PhoneResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> PhoneResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(code) = present(ENV_FALLBACK_CODE) {
            config.fallback = CallingCode::parse(&code)
                .map_err(|e| PhoneError::config(ENV_FALLBACK_CODE, e.to_string()))?;
        }

        if let Some(ms) = present(ENV_LOCATION_TIMEOUT_MS) {
            let ms: u64 = ms.trim().parse().map_err(|_| {
                PhoneError::config(ENV_LOCATION_TIMEOUT_MS, "expected whole milliseconds")
            })?;
            config.location_timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }
}
