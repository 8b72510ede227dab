//! Device location as an injected capability.
//!
//! The normalizer never talks to an OS location API directly. It asks a
//! [`LocationResolver`] for an ISO country code, and the resolver either
//! answers or yields `None`. Every failure is absorbed at this boundary.
//!
//! - [`LocationPlatform`]: the host platform's permission, position and
//!   reverse-geocode calls
//! - [`DeviceLocationResolver`]: wraps a platform and absorbs its failures
//! - [`NoLocation`]: never resolves; gives the synchronous behaviour
//! - [`FixedCountry`]: canned answer, for tests and workstation use

pub mod device;

pub use device::DeviceLocationResolver;

use crate::domain::IsoCountryCode;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Why a location lookup produced nothing.
///
/// None of these reach the caller of the normalizer; they are logged and
/// the fallback chain moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("foreground location permission was not granted")]
    PermissionDenied,

    #[error("position fix did not arrive within {0:?}")]
    PositionTimeout(Duration),

    #[error("reverse geocoding returned no country")]
    GeocodeEmpty,

    #[error("no calling code registered for country '{0}'")]
    UnmappedIsoCode(String),

    #[error("location platform failure: {0}")]
    Platform(String),
}

/// Outcome of a foreground permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// A position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One reverse-geocoding candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Place {
    pub iso_country_code: Option<String>,
}

impl Place {
    pub fn in_country(iso: &str) -> Self {
        Self {
            iso_country_code: Some(iso.to_string()),
        }
    }
}

/// Host platform location API.
///
/// Implementations may fail in any way, including panicking; the
/// [`DeviceLocationResolver`] wrapping them turns all of it into `None`.
pub trait LocationPlatform: Send + Sync {
    /// Asks the user for foreground location access.
    fn request_foreground_permission(
        &self,
    ) -> impl Future<Output = Result<Permission, LocationError>> + Send;

    /// Fetches the current position, giving up after `timeout`.
    fn current_position(
        &self,
        timeout: Duration,
    ) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;

    /// Converts a coordinate into place candidates, best first.
    fn reverse_geocode(
        &self,
        position: Coordinates,
    ) -> impl Future<Output = Result<Vec<Place>, LocationError>> + Send;
}

/// Source of the device's current country.
///
/// Must never fail or panic: absence of an answer is `None`. Resolvers are
/// executor-agnostic; [`DeviceLocationResolver`] only adds its own
/// `tokio::time::timeout` bound when polled inside a Tokio runtime, which
/// must then have the time driver enabled.
pub trait LocationResolver: Send + Sync {
    fn resolve_iso_country(&self) -> impl Future<Output = Option<IsoCountryCode>> + Send;
}

impl<R: LocationResolver> LocationResolver for Arc<R> {
    fn resolve_iso_country(&self) -> impl Future<Output = Option<IsoCountryCode>> + Send {
        (**self).resolve_iso_country()
    }
}

impl<R: LocationResolver> LocationResolver for &R {
    fn resolve_iso_country(&self) -> impl Future<Output = Option<IsoCountryCode>> + Send {
        (**self).resolve_iso_country()
    }
}

/// Resolver that never knows the country.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationResolver for NoLocation {
    async fn resolve_iso_country(&self) -> Option<IsoCountryCode> {
        None
    }
}

/// Resolver with a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct FixedCountry(Option<IsoCountryCode>);

impl FixedCountry {
    pub fn new(iso: IsoCountryCode) -> Self {
        Self(Some(iso))
    }

    pub fn unknown() -> Self {
        Self(None)
    }
}

impl LocationResolver for FixedCountry {
    async fn resolve_iso_country(&self) -> Option<IsoCountryCode> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_location_resolves_nothing() {
        assert_eq!(NoLocation.resolve_iso_country().await, None);
    }

    #[tokio::test]
    async fn test_fixed_country() {
        let ph = IsoCountryCode::parse("PH").unwrap();
        let resolver = FixedCountry::new(ph.clone());
        assert_eq!(resolver.resolve_iso_country().await, Some(ph));
        assert_eq!(FixedCountry::unknown().resolve_iso_country().await, None);
    }

    #[tokio::test]
    async fn test_shared_resolver() {
        let resolver = Arc::new(FixedCountry::new(IsoCountryCode::parse("GB").unwrap()));
        let iso = resolver.resolve_iso_country().await.unwrap();
        assert_eq!(iso.as_str(), "GB");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LocationError::UnmappedIsoCode("AQ".to_string()).to_string(),
            "no calling code registered for country 'AQ'"
        );
    }
}
