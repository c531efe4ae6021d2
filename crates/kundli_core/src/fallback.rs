//! Fallback to placeholder data when the primary backend is unavailable.

use kundli_time::TimeValue;
use log::warn;

use crate::error::ProviderError;
use crate::placeholder::PlaceholderProvider;
use crate::types::{GeoLocation, HouseFrame, PlanetPosition, PositionSource};
use crate::{Body, PositionProvider};

/// Wraps a primary provider; answers from [`PlaceholderProvider`] when the
/// primary reports [`ProviderError::Unavailable`]. Every other error
/// propagates unchanged. Successful answers carry the primary's own
/// [`PositionProvider::source`].
#[derive(Debug, Clone)]
pub struct FallbackProvider<P> {
    primary: P,
    placeholder: PlaceholderProvider,
}

impl<P: PositionProvider> FallbackProvider<P> {
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            placeholder: PlaceholderProvider,
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// Position plus the backend that produced it.
    pub fn position_with_source(
        &self,
        t: TimeValue,
        body: Body,
    ) -> Result<(PlanetPosition, PositionSource), ProviderError> {
        match self.primary.position(t, body) {
            Ok(p) => Ok((p, self.primary.source())),
            Err(ProviderError::Unavailable(reason)) => {
                warn!(
                    "{} backend unavailable ({reason}); using placeholder position for {body:?}",
                    self.primary.name()
                );
                let p = self.placeholder.position(t, body)?;
                Ok((p, PositionSource::Placeholder))
            }
            Err(e) => Err(e),
        }
    }

    /// House frame plus the backend that produced it.
    pub fn houses_with_source(
        &self,
        t: TimeValue,
        location: &GeoLocation,
    ) -> Result<(HouseFrame, PositionSource), ProviderError> {
        match self.primary.houses(t, location) {
            Ok(h) => Ok((h, self.primary.source())),
            Err(ProviderError::Unavailable(reason)) => {
                warn!(
                    "{} backend unavailable ({reason}); using placeholder houses",
                    self.primary.name()
                );
                let h = self.placeholder.houses(t, location)?;
                Ok((h, PositionSource::Placeholder))
            }
            Err(e) => Err(e),
        }
    }
}

impl<P: PositionProvider> PositionProvider for FallbackProvider<P> {
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    fn position(&self, t: TimeValue, body: Body) -> Result<PlanetPosition, ProviderError> {
        self.position_with_source(t, body).map(|(p, _)| p)
    }

    fn houses(&self, t: TimeValue, location: &GeoLocation) -> Result<HouseFrame, ProviderError> {
        self.houses_with_source(t, location).map(|(h, _)| h)
    }

    fn source(&self) -> PositionSource {
        self.primary.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keplerian::KeplerianProvider;
    use crate::placeholder::UnavailableProvider;

    #[test]
    fn healthy_backend_reports_backend() {
        let p = FallbackProvider::new(KeplerianProvider);
        let (_, src) = p
            .position_with_source(TimeValue::from_jd(2_451_545.0), Body::Sun)
            .unwrap();
        assert_eq!(src, PositionSource::Backend);
    }

    #[test]
    fn offline_backend_falls_back() {
        let p = FallbackProvider::new(UnavailableProvider::new("offline"));
        let t = TimeValue::from_jd(2_451_545.0);
        let (pos, src) = p.position_with_source(t, Body::Moon).unwrap();
        assert_eq!(src, PositionSource::Placeholder);
        assert_eq!(pos, PlaceholderProvider.position(t, Body::Moon).unwrap());
        let (_, hsrc) = p
            .houses_with_source(t, &GeoLocation::new(0.0, 0.0))
            .unwrap();
        assert_eq!(hsrc, PositionSource::Placeholder);
    }

    #[test]
    fn placeholder_primary_keeps_its_source() {
        let p = FallbackProvider::new(PlaceholderProvider);
        let t = TimeValue::from_jd(2_451_545.0);
        let (_, src) = p.position_with_source(t, Body::Sun).unwrap();
        assert_eq!(src, PositionSource::Placeholder);
        let (_, hsrc) = p
            .houses_with_source(t, &GeoLocation::new(13.0, 80.0))
            .unwrap();
        assert_eq!(hsrc, PositionSource::Placeholder);
    }

    #[test]
    fn other_errors_propagate() {
        let p = FallbackProvider::new(KeplerianProvider);
        let err = p
            .position_with_source(TimeValue::from_jd(0.0), Body::Sun)
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidTime { .. }));
    }

    #[test]
    fn wraps_trait_objects() {
        let offline = UnavailableProvider::new("x");
        let dyn_ref: &dyn PositionProvider = &offline;
        let p = FallbackProvider::new(dyn_ref);
        assert_eq!(p.name(), "offline");
        assert!(p.position(TimeValue::from_jd(2_451_545.0), Body::Sun).is_ok());
    }
}
