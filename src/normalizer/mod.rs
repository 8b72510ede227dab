//! Phone normalization service.
//!
//! [`PhoneNormalizer`] runs the fallback chain that turns free-form input
//! into an international number without asking the user for a country:
//!
//! 1. blank input or input without digits yields `""`
//! 2. input already starting with `+` is returned verbatim
//! 3. a calling code embedded at the start of the digits
//! 4. the device's current country, via the injected [`LocationResolver`]
//! 5. 10-digit patterns (Philippine mobile, then North American)
//! 6. the configured fallback calling code
//!
//! The first step that produces a value wins. Nothing in the chain returns
//! an error; the result is a best guess, not a validated E.164 number.

pub mod stage;

pub use stage::{Normalized, Stage};

use crate::config::NormalizerConfig;
use crate::domain::CallingCodeTable;
use crate::location::{LocationResolver, NoLocation};
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// Normalizer parameterized by its location source.
///
/// Holds no mutable state; concurrent calls are independent and each may
/// trigger its own location lookup.
#[derive(Debug, Clone)]
pub struct PhoneNormalizer<R = NoLocation> {
    resolver: R,
    config: NormalizerConfig,
}

impl PhoneNormalizer<NoLocation> {
    /// A normalizer that never consults device location.
    pub fn offline(config: NormalizerConfig) -> Self {
        Self::new(NoLocation, config)
    }
}

impl Default for PhoneNormalizer<NoLocation> {
    fn default() -> Self {
        Self::offline(NormalizerConfig::default())
    }
}

impl<R> PhoneNormalizer<R> {
    pub fn new(resolver: R, config: NormalizerConfig) -> Self {
        Self { resolver, config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Runs the chain without the location step.
    ///
    /// For contexts that cannot wait, such as as-you-type hints. Matches
    /// [`normalize_detailed`](Self::normalize_detailed) with a resolver that
    /// never answers.
    pub fn normalize_sync(&self, raw: &str) -> Normalized {
        trace!("NORMALIZE:normalize_sync [START] raw: {:?}", raw);

        let result = match stage::leading_steps(raw, CallingCodeTable::builtin()) {
            ControlFlow::Break(done) => done,
            ControlFlow::Continue(digits) => stage::trailing_steps(&digits, &self.config.fallback),
        };

        debug!("NORMALIZE:normalize_sync [{}] len: {}", result.stage, result.value.len());
        result
    }
}

impl<R: LocationResolver> PhoneNormalizer<R> {
    /// Normalizes `raw` to an international string.
    ///
    /// Returns `""` or a string starting with `+`. Never fails.
    pub async fn normalize(&self, raw: &str) -> String {
        self.normalize_detailed(raw).await.into_value()
    }

    /// Like [`normalize`](Self::normalize), also reporting which stage answered.
    pub async fn normalize_detailed(&self, raw: &str) -> Normalized {
        trace!("NORMALIZE:normalize [START] raw: {:?}", raw);

        let digits = match stage::leading_steps(raw, CallingCodeTable::builtin()) {
            ControlFlow::Break(done) => {
                debug!("NORMALIZE:normalize [{}] len: {}", done.stage, done.value.len());
                return done;
            }
            ControlFlow::Continue(digits) => digits,
        };

        let result = match self.locate(&digits).await {
            Some(found) => found,
            None => stage::trailing_steps(&digits, &self.config.fallback),
        };

        debug!(
            "NORMALIZE:normalize [{}] digits: {}, len: {}",
            result.stage,
            digits.len(),
            result.value.len()
        );
        result
    }

    async fn locate(&self, digits: &str) -> Option<Normalized> {
        let iso = self.resolver.resolve_iso_country().await?;

        match stage::from_country(digits, &iso) {
            Ok(found) => Some(found),
            Err(err) => {
                debug!("NORMALIZE:locate [ABSORBED] {}", err);
                None
            }
        }
    }
}
