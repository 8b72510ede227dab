//! Resolver backed by a device location platform.

use super::{LocationError, LocationPlatform, LocationResolver, Permission};
use crate::config::NormalizerConfig;
use crate::domain::IsoCountryCode;
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tracing::{debug, warn};

/// Default bound on the position fetch.
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Permission, position fix and reverse geocode, in that order.
///
/// The position fetch is bounded twice: the platform is handed the timeout,
/// and inside a Tokio runtime the call is also cut off by
/// `tokio::time::timeout` in case the platform ignores it. Under any other
/// executor only the platform's own timeout applies. A Tokio runtime must
/// have the time driver enabled.
#[derive(Debug, Clone)]
pub struct DeviceLocationResolver<P> {
    platform: P,
    timeout: Duration,
}

impl<P: LocationPlatform> DeviceLocationResolver<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            timeout: DEFAULT_LOCATION_TIMEOUT,
        }
    }

    pub fn with_config(platform: P, config: &NormalizerConfig) -> Self {
        Self::new(platform).with_timeout(config.location_timeout)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Runs the lookup, reporting why it failed.
    pub async fn try_resolve(&self) -> Result<IsoCountryCode, LocationError> {
        match self.platform.request_foreground_permission().await? {
            Permission::Granted => {}
            Permission::Denied => return Err(LocationError::PermissionDenied),
        }

        let in_tokio = tokio::runtime::Handle::try_current().is_ok();
        let position = if in_tokio {
            tokio::time::timeout(self.timeout, self.platform.current_position(self.timeout))
                .await
                .map_err(|_| LocationError::PositionTimeout(self.timeout))??
        } else {
            self.platform.current_position(self.timeout).await?
        };

        let places = self.platform.reverse_geocode(position).await?;
        let code = places
            .into_iter()
            .next()
            .and_then(|place| place.iso_country_code)
            .filter(|code| !code.trim().is_empty())
            .ok_or(LocationError::GeocodeEmpty)?;

        IsoCountryCode::parse(&code)
            .map_err(|e| LocationError::Platform(format!("geocoder returned {}", e)))
    }

    /// Like [`try_resolve`](Self::try_resolve), with a panicking platform
    /// reported as [`LocationError::Platform`].
    pub async fn resolve_caught(&self) -> Result<IsoCountryCode, LocationError> {
        AssertUnwindSafe(self.try_resolve())
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                warn!("LOCATION:resolve_caught [PANIC] location platform panicked: {}", message);
                Err(LocationError::Platform(format!("platform panicked: {}", message)))
            })
    }
}

impl<P: LocationPlatform> LocationResolver for DeviceLocationResolver<P> {
    async fn resolve_iso_country(&self) -> Option<IsoCountryCode> {
        match self.resolve_caught().await {
            Ok(iso) => {
                debug!("LOCATION:resolve_iso_country [RESOLVED] country: {}", iso);
                Some(iso)
            }
            Err(err) => {
                debug!("LOCATION:resolve_iso_country [ABSORBED] {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{Coordinates, Place};

    struct Scripted {
        permission: Permission,
        places: Vec<Place>,
    }

    impl LocationPlatform for Scripted {
        async fn request_foreground_permission(&self) -> Result<Permission, LocationError> {
            Ok(self.permission)
        }

        async fn current_position(&self, _timeout: Duration) -> Result<Coordinates, LocationError> {
            Ok(Coordinates::new(14.5995, 120.9842))
        }

        async fn reverse_geocode(&self, _position: Coordinates) -> Result<Vec<Place>, LocationError> {
            Ok(self.places.clone())
        }
    }

    #[tokio::test]
    async fn test_resolves_first_candidate() {
        let resolver = DeviceLocationResolver::new(Scripted {
            permission: Permission::Granted,
            places: vec![Place::in_country("ph"), Place::in_country("US")],
        });
        assert_eq!(resolver.try_resolve().await.unwrap().as_str(), "PH");
    }

    #[tokio::test]
    async fn test_denied_permission() {
        let resolver = DeviceLocationResolver::new(Scripted {
            permission: Permission::Denied,
            places: vec![Place::in_country("PH")],
        });
        assert_eq!(
            resolver.try_resolve().await,
            Err(LocationError::PermissionDenied)
        );
        assert_eq!(resolver.resolve_iso_country().await, None);
    }

    #[tokio::test]
    async fn test_first_candidate_without_country_is_empty() {
        let resolver = DeviceLocationResolver::new(Scripted {
            permission: Permission::Granted,
            places: vec![Place::default(), Place::in_country("US")],
        });
        assert_eq!(resolver.try_resolve().await, Err(LocationError::GeocodeEmpty));
    }

    #[test]
    fn test_resolves_outside_tokio() {
        let resolver = DeviceLocationResolver::new(Scripted {
            permission: Permission::Granted,
            places: vec![Place::in_country("PH")],
        });
        let iso = resolver.resolve_iso_country().now_or_never();
        assert_eq!(iso, Some(Some(IsoCountryCode::parse("PH").unwrap())));
    }

    #[test]
    fn test_default_timeout() {
        let resolver = DeviceLocationResolver::new(Scripted {
            permission: Permission::Granted,
            places: Vec::new(),
        });
        assert_eq!(resolver.timeout(), Duration::from_secs(10));
    }
}
