//! Non-astronomical backends: deterministic placeholder data and an offline stub.

use kundli_time::{J2000_JD, TimeValue};

use crate::error::ProviderError;
use crate::types::{GeoLocation, HouseFrame, PlanetPosition, PositionSource, normalize_deg};
use crate::{Body, PositionProvider};

/// Longitude at J2000 (deg) and daily rate (deg/day) per body.
///
/// The numbers resemble mean motions so that the output looks plausible, but
/// the result is NOT an ephemeris.
const fn linear_model(body: Body) -> (f64, f64) {
    match body {
        Body::Sun => (280.0, 0.985_6),
        Body::Moon => (218.0, 13.176_4),
        Body::Mercury => (250.0, 1.383),
        Body::Venus => (180.0, 1.200),
        Body::Mars => (355.0, 0.524),
        Body::Jupiter => (35.0, 0.083),
        Body::Saturn => (50.0, 0.033),
        Body::MeanNode => (125.0, -0.052_95),
    }
}

/// Degrees the placeholder ascendant advances per day.
const ASCENDANT_RATE_DEG_PER_DAY: f64 = 360.985_6;

/// Deterministic placeholder backend.
///
/// Longitude is a fixed linear function of the time value per body; houses
/// use a linear ascendant shifted by the observer's longitude. Identical
/// inputs always give identical outputs. It reports
/// [`PositionSource::Placeholder`], so every chart built from it is flagged
/// as placeholder data, whether it is used directly or as a fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderProvider;

impl PlaceholderProvider {
    pub fn new() -> Self {
        Self
    }
}

impl PositionProvider for PlaceholderProvider {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn position(&self, t: TimeValue, body: Body) -> Result<PlanetPosition, ProviderError> {
        if !t.jd().is_finite() {
            return Err(ProviderError::InvalidTime {
                jd_ut: t.jd(),
                reason: "non-finite",
            });
        }
        let (base, rate) = linear_model(body);
        Ok(PlanetPosition {
            body,
            longitude_deg: normalize_deg(base + rate * (t.jd() - J2000_JD)),
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_deg_per_day: rate,
        })
    }

    fn houses(&self, t: TimeValue, location: &GeoLocation) -> Result<HouseFrame, ProviderError> {
        if !t.jd().is_finite() {
            return Err(ProviderError::InvalidTime {
                jd_ut: t.jd(),
                reason: "non-finite",
            });
        }
        location.validate()?;
        // Work from the fractional day to keep the product small.
        let days = t.jd() - J2000_JD;
        let asc = normalize_deg(
            100.0 + ASCENDANT_RATE_DEG_PER_DAY * days.fract() + 0.985_6 * days.trunc()
                + location.longitude_deg,
        );
        Ok(HouseFrame::equal(asc, asc - 90.0))
    }

    fn source(&self) -> PositionSource {
        PositionSource::Placeholder
    }
}

/// Backend that is never available. Stands in for an offline ephemeris.
#[derive(Debug, Clone, Default)]
pub struct UnavailableProvider {
    reason: String,
}

impl UnavailableProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PositionProvider for UnavailableProvider {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn position(&self, _t: TimeValue, _body: Body) -> Result<PlanetPosition, ProviderError> {
        Err(ProviderError::Unavailable(self.reason.clone()))
    }

    fn houses(&self, _t: TimeValue, _location: &GeoLocation) -> Result<HouseFrame, ProviderError> {
        Err(ProviderError::Unavailable(self.reason.clone()))
    }
}
