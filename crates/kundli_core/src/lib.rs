//! Position-provider seam for the chart engine.
//!
//! This crate defines the [`PositionProvider`] contract (time value + body →
//! ecliptic position; time value + place → house frame) and the backends that
//! ship in-tree:
//! - [`KeplerianProvider`]: mean Keplerian elements plus a truncated lunar series
//! - [`PlaceholderProvider`]: deterministic, non-astronomical data
//! - [`UnavailableProvider`]: an offline backend that always fails
//! - [`FallbackProvider`]: substitutes placeholder data when its primary is unavailable
//!
//! Providers are passed explicitly; there is no process-wide instance.

pub mod error;
pub mod fallback;
pub mod keplerian;
mod lunar;
pub mod placeholder;
pub mod types;

use serde::{Deserialize, Serialize};

use kundli_time::TimeValue;

pub use error::ProviderError;
pub use fallback::FallbackProvider;
pub use keplerian::KeplerianProvider;
pub use placeholder::{PlaceholderProvider, UnavailableProvider};
pub use types::{
    GeoLocation, HouseFrame, PlanetPosition, PositionSource, angle_delta_deg, equal_cusps,
    normalize_deg,
};

/// Bodies a position provider answers for.
///
/// `MeanNode` is the Moon's mean ascending node. The descending node is
/// derived downstream as the point opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    MeanNode,
}

/// All bodies in provider order.
pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::MeanNode,
];

impl Body {
    /// NAIF-style body code. The mean node has no NAIF id and uses -10.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
            Self::MeanNode => -10,
        }
    }

    /// Convert a body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            301 => Some(Self::Moon),
            199 => Some(Self::Mercury),
            299 => Some(Self::Venus),
            499 => Some(Self::Mars),
            599 => Some(Self::Jupiter),
            699 => Some(Self::Saturn),
            -10 => Some(Self::MeanNode),
            _ => None,
        }
    }

    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }
}

/// Ephemeris backend contract.
///
/// Implementations must be deterministic for identical inputs and return
/// longitudes normalized into [0, 360). Providers are [`Send`] + [`Sync`] so a
/// single instance can serve concurrent chart requests.
pub trait PositionProvider: Send + Sync {
    /// Short backend name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Tropical geocentric ecliptic position of `body` at `t`.
    fn position(&self, t: TimeValue, body: Body) -> Result<PlanetPosition, ProviderError>;

    /// Ascendant, midheaven and equal house cusps at `t` for `location`.
    fn houses(&self, t: TimeValue, location: &GeoLocation) -> Result<HouseFrame, ProviderError>;

    /// Kind of data this backend returns on success.
    fn source(&self) -> PositionSource {
        PositionSource::Backend
    }
}

impl<T: PositionProvider + ?Sized> PositionProvider for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn position(&self, t: TimeValue, body: Body) -> Result<PlanetPosition, ProviderError> {
        (**self).position(t, body)
    }

    fn houses(&self, t: TimeValue, location: &GeoLocation) -> Result<HouseFrame, ProviderError> {
        (**self).houses(t, location)
    }

    fn source(&self) -> PositionSource {
        (**self).source()
    }
}

impl<T: PositionProvider + ?Sized> PositionProvider for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn position(&self, t: TimeValue, body: Body) -> Result<PlanetPosition, ProviderError> {
        (**self).position(t, body)
    }

    fn houses(&self, t: TimeValue, location: &GeoLocation) -> Result<HouseFrame, ProviderError> {
        (**self).houses(t, location)
    }

    fn source(&self) -> PositionSource {
        (**self).source()
    }
}
