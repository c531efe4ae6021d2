//! Positions of the nine grahas at one instant.

use kundli_core::{
    FallbackProvider, PlanetPosition, PositionProvider, PositionSource, angle_delta_deg,
    normalize_deg,
};
use kundli_time::TimeValue;
use kundli_vedic::{ALL_GRAHAS, Graha};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// One graha's ecliptic position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Ecliptic longitude, [0, 360).
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    pub speed_deg_per_day: f64,
}

impl GrahaPosition {
    fn from_provider(graha: Graha, p: &PlanetPosition) -> Self {
        Self {
            graha,
            longitude_deg: p.longitude_deg,
            latitude_deg: p.latitude_deg,
            distance_au: p.distance_au,
            speed_deg_per_day: p.speed_deg_per_day,
        }
    }

    /// Ketu: the point opposite Rahu.
    fn opposite(rahu: &GrahaPosition) -> Self {
        Self {
            graha: Graha::Ketu,
            longitude_deg: normalize_deg(rahu.longitude_deg + 180.0),
            latitude_deg: -rahu.latitude_deg,
            distance_au: rahu.distance_au,
            speed_deg_per_day: rahu.speed_deg_per_day,
        }
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// Ketu may differ from Rahu + 180 deg by this much after a text round trip.
const NODE_AXIS_TOLERANCE_DEG: f64 = 1e-9;

/// Immutable positions of all nine grahas, in [`ALL_GRAHAS`] order.
///
/// Deserialization goes through the same checks as [`ChartSnapshot::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotData")]
pub struct ChartSnapshot {
    time: TimeValue,
    grahas: [GrahaPosition; 9],
    /// `Placeholder` if any position came from placeholder data.
    source: PositionSource,
}

/// Unchecked wire form of [`ChartSnapshot`].
#[derive(Deserialize)]
struct SnapshotData {
    time: TimeValue,
    grahas: [GrahaPosition; 9],
    source: PositionSource,
}

impl TryFrom<SnapshotData> for ChartSnapshot {
    type Error = ChartError;

    fn try_from(data: SnapshotData) -> Result<Self, ChartError> {
        Self::new(data.time, data.grahas, data.source)
    }
}

impl ChartSnapshot {
    /// Build a snapshot from positions computed elsewhere.
    ///
    /// Rejects a non-finite time, grahas out of [`ALL_GRAHAS`] order,
    /// longitudes outside [0, 360) and a Ketu that does not oppose Rahu.
    pub fn new(
        time: TimeValue,
        grahas: [GrahaPosition; 9],
        source: PositionSource,
    ) -> Result<Self, ChartError> {
        if !time.jd().is_finite() {
            return Err(ChartError::request("snapshot time must be finite"));
        }
        for (pos, expected) in grahas.iter().zip(ALL_GRAHAS) {
            if pos.graha != expected {
                return Err(ChartError::request("snapshot grahas out of canonical order"));
            }
            if !(0.0..360.0).contains(&pos.longitude_deg) {
                return Err(ChartError::request("snapshot longitude outside [0, 360)"));
            }
        }
        let rahu = grahas[Graha::Rahu.index() as usize].longitude_deg;
        let ketu = grahas[Graha::Ketu.index() as usize].longitude_deg;
        if angle_delta_deg(normalize_deg(rahu + 180.0), ketu).abs() > NODE_AXIS_TOLERANCE_DEG {
            return Err(ChartError::request("snapshot Ketu does not oppose Rahu"));
        }
        Ok(Self {
            time,
            grahas,
            source,
        })
    }

    /// Query `provider` for every graha at `t`.
    ///
    /// An unavailable backend is replaced by placeholder data. Either way a
    /// placeholder answer is reported in [`ChartSnapshot::source`]; any other
    /// provider error is returned.
    pub fn compute(provider: &dyn PositionProvider, t: TimeValue) -> Result<Self, ChartError> {
        let provider = FallbackProvider::new(provider);
        let mut source = PositionSource::Backend;
        let mut positions = Vec::with_capacity(9);

        for graha in ALL_GRAHAS {
            let Some(body) = graha.body() else {
                continue;
            };
            let (pos, src) = provider.position_with_source(t, body)?;
            source = source.merge(src);
            positions.push(GrahaPosition::from_provider(graha, &pos));
        }

        let rahu = positions
            .iter()
            .find(|p| p.graha == Graha::Rahu)
            .copied()
            .ok_or(ChartError::request("provider returned no lunar node"))?;
        positions.push(GrahaPosition::opposite(&rahu));

        let grahas: [GrahaPosition; 9] = positions
            .try_into()
            .map_err(|_| ChartError::request("incomplete graha set"))?;
        debug!(
            "snapshot at JD {:.5} from {} ({source:?})",
            t.jd(),
            provider.name()
        );
        Ok(Self {
            time: t,
            grahas,
            source,
        })
    }

    pub fn time(&self) -> TimeValue {
        self.time
    }

    /// All nine positions in [`ALL_GRAHAS`] order.
    pub fn grahas(&self) -> &[GrahaPosition; 9] {
        &self.grahas
    }

    pub fn source(&self) -> PositionSource {
        self.source
    }

    pub fn position(&self, graha: Graha) -> &GrahaPosition {
        &self.grahas[graha.index() as usize]
    }

    pub fn longitude(&self, graha: Graha) -> f64 {
        self.position(graha).longitude_deg
    }

    pub fn moon_longitude(&self) -> f64 {
        self.longitude(Graha::Chandra)
    }

    pub fn sun_longitude(&self) -> f64 {
        self.longitude(Graha::Surya)
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == PositionSource::Placeholder
    }
}
