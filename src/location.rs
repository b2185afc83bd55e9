//! Location resolution
//!
//! Resolves the coordinates the forecast is fetched for. The host's one-shot
//! location service is modeled by [`LocationProvider`]; whatever goes wrong
//! there (no fix, provider error, out-of-range values), the resolver answers
//! with the fixed fallback coordinate instead of an error.

use crate::config::LocationConfig;
use crate::models::Coordinates;
use anyhow::Result;
use tracing::debug;

/// Latitude substituted when no location fix can be obtained
pub const FALLBACK_LATITUDE: f64 = 35.6341;
/// Longitude substituted when no location fix can be obtained
pub const FALLBACK_LONGITUDE: f64 = 139.7184;

/// One-shot source of a device location fix
///
/// A provider is asked exactly once per run; it either yields a fix,
/// reports that none is available, or fails.
pub trait LocationProvider {
    /// Request a single location fix
    fn current_fix(&self) -> Result<Option<Coordinates>>;
}

/// Provider backed by coordinates pinned in the configuration
///
/// Stands in for a GPS fix on hosts without a location service.
pub struct ConfiguredProvider {
    coordinates: Option<Coordinates>,
}

impl ConfiguredProvider {
    /// Build a provider from the location section of the config
    #[must_use]
    pub fn from_config(config: &LocationConfig) -> Self {
        let coordinates = match (config.latitude, config.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        };
        Self { coordinates }
    }
}

impl LocationProvider for ConfiguredProvider {
    fn current_fix(&self) -> Result<Option<Coordinates>> {
        Ok(self.coordinates)
    }
}

/// Provider for hosts with no location service at all
pub struct UnavailableProvider;

impl LocationProvider for UnavailableProvider {
    fn current_fix(&self) -> Result<Option<Coordinates>> {
        Ok(None)
    }
}

/// Service for resolving the run's coordinate pair
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve coordinates from a provider, substituting the fallback on any failure
    #[must_use]
    pub fn resolve(provider: &dyn LocationProvider) -> Coordinates {
        match provider.current_fix() {
            Ok(Some(coords)) if coords.is_valid() => {
                debug!("Location fix obtained: {}", coords.format_coordinates());
                coords
            }
            Ok(Some(coords)) => {
                debug!(
                    "Location fix out of range ({}), using fallback",
                    coords.format_coordinates()
                );
                Self::fallback()
            }
            Ok(None) => {
                debug!("No location fix available, using fallback");
                Self::fallback()
            }
            Err(e) => {
                debug!("Location lookup failed: {}, using fallback", e);
                Self::fallback()
            }
        }
    }

    /// The fixed fallback coordinate
    #[must_use]
    pub fn fallback() -> Coordinates {
        Coordinates::new(FALLBACK_LATITUDE, FALLBACK_LONGITUDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FailingProvider;

    impl LocationProvider for FailingProvider {
        fn current_fix(&self) -> Result<Option<Coordinates>> {
            Err(anyhow!("location service unavailable"))
        }
    }

    #[test]
    fn test_resolve_uses_provider_fix() {
        let config = LocationConfig {
            latitude: Some(35.0),
            longitude: Some(135.0),
        };
        let provider = ConfiguredProvider::from_config(&config);
        let coords = LocationResolver::resolve(&provider);
        assert_eq!(coords, Coordinates::new(35.0, 135.0));
    }

    #[test]
    fn test_resolve_falls_back_without_fix() {
        let coords = LocationResolver::resolve(&UnavailableProvider);
        assert_eq!(coords.latitude, FALLBACK_LATITUDE);
        assert_eq!(coords.longitude, FALLBACK_LONGITUDE);
    }

    #[test]
    fn test_resolve_falls_back_on_provider_error() {
        let coords = LocationResolver::resolve(&FailingProvider);
        assert_eq!(coords, LocationResolver::fallback());
    }

    #[test]
    fn test_resolve_falls_back_on_invalid_fix() {
        let config = LocationConfig {
            latitude: Some(123.0),
            longitude: Some(500.0),
        };
        let provider = ConfiguredProvider::from_config(&config);
        let coords = LocationResolver::resolve(&provider);
        assert_eq!(coords, LocationResolver::fallback());
    }

    #[test]
    fn test_partial_config_yields_no_fix() {
        let config = LocationConfig {
            latitude: Some(35.0),
            longitude: None,
        };
        let provider = ConfiguredProvider::from_config(&config);
        assert!(provider.current_fix().unwrap().is_none());
    }
}
