//! Value types exchanged across the provider seam.

use serde::{Deserialize, Serialize};

use crate::Body;
use crate::error::ProviderError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed shortest angular difference `b - a` in (-180, 180].
pub fn angle_delta_deg(a: f64, b: f64) -> f64 {
    let d = normalize_deg(b - a);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Ecliptic position of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    /// Ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Geocentric distance, AU.
    pub distance_au: f64,
    /// Rate of change of longitude, degrees/day. Negative when retrograde.
    pub speed_deg_per_day: f64,
}

impl PlanetPosition {
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// Observer location on Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(ProviderError::InvalidLocation(
                "latitude must be finite and within [-90, 90]",
            ));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(ProviderError::InvalidLocation(
                "longitude must be finite and within [-180, 180]",
            ));
        }
        Ok(())
    }
}

/// Twelve equal cusps starting at the ascendant, each 30° further.
pub fn equal_cusps(ascendant_deg: f64) -> [f64; 12] {
    let asc = normalize_deg(ascendant_deg);
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_deg(asc + i as f64 * 30.0);
    }
    cusps
}

/// Ascendant, midheaven and house cusps for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    /// Cusp longitudes, house 1 first. `cusps_deg[0] == ascendant_deg`.
    pub cusps_deg: [f64; 12],
}

impl HouseFrame {
    /// Equal-house frame from an ascendant and midheaven.
    pub fn equal(ascendant_deg: f64, mc_deg: f64) -> Self {
        let cusps_deg = equal_cusps(ascendant_deg);
        Self {
            ascendant_deg: cusps_deg[0],
            mc_deg: normalize_deg(mc_deg),
            cusps_deg,
        }
    }
}

/// Which backend produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionSource {
    /// The configured ephemeris backend.
    Backend,
    /// Deterministic placeholder data, chosen directly or substituted for an
    /// unavailable backend.
    Placeholder,
}

impl PositionSource {
    /// Combine two sources: placeholder if either is.
    pub fn merge(self, other: Self) -> Self {
        if self == Self::Placeholder || other == Self::Placeholder {
            Self::Placeholder
        } else {
            Self::Backend
        }
    }
}
