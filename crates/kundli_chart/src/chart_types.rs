//! Request and response shapes for chart operations.
//!
//! Responses serialize with RFC 3339 UTC timestamps next to the raw JD
//! values. Dasha intervals are start-inclusive, end-exclusive.

use chrono::{DateTime, Utc};
use kundli_time::{BirthMoment, TimeValue};
use kundli_vedic::{
    Bhava, CompatibilityResult, DashaLevel, DashaNode, DashaPeriod, Graha, Nakshatra,
    NavamsaPosition, Panchangam, Rashi, Vaar,
};
use serde::{Deserialize, Serialize};

use crate::snapshot::ChartSnapshot;

// ── Requests ─────────────────────────────────────────────────────────

/// Where the birth coordinates come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartInput {
    /// Coordinates and zone offset given directly.
    Birth(BirthMoment),
    /// Coordinates and zone offset looked up by place name. The resolved
    /// place overrides the moment's latitude, longitude and offset.
    Place { place: String, moment: BirthMoment },
}

/// Input to [`generate_chart`](crate::generate_chart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub input: ChartInput,
    /// Moment for `dasha.current`. `None` leaves it out of the response.
    #[serde(default)]
    pub as_of: Option<TimeValue>,
}

impl ChartRequest {
    pub fn birth(moment: BirthMoment) -> Self {
        Self {
            input: ChartInput::Birth(moment),
            as_of: None,
        }
    }

    pub fn place(place: impl Into<String>, moment: BirthMoment) -> Self {
        Self {
            input: ChartInput::Place {
                place: place.into(),
                moment,
            },
            as_of: None,
        }
    }

    pub fn with_as_of(mut self, t: TimeValue) -> Self {
        self.as_of = Some(t);
        self
    }
}

/// One side of a compatibility match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchSubject {
    /// Positions already computed.
    Snapshot(Box<ChartSnapshot>),
    /// Positions still to be computed from a birth moment.
    Birth(BirthMoment),
}

// ── Responses ────────────────────────────────────────────────────────

/// A moment as both JD (UT) and calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Instant {
    pub jd: f64,
    /// `None` when the JD falls outside chrono's calendar range.
    pub utc: Option<DateTime<Utc>>,
}

impl Instant {
    pub fn from_jd(jd: f64) -> Self {
        Self {
            jd,
            utc: TimeValue::from_jd(jd).to_datetime_utc(),
        }
    }
}

impl From<TimeValue> for Instant {
    fn from(t: TimeValue) -> Self {
        Self::from_jd(t.jd())
    }
}

/// A dasha period with calendar boundaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriodView {
    pub lord: Graha,
    pub level: DashaLevel,
    pub order: u16,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub start_jd: f64,
    pub end_jd: f64,
    pub duration_years: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaPeriodView>,
}

impl DashaPeriodView {
    pub fn from_period(p: &DashaPeriod) -> Self {
        Self {
            lord: p.lord,
            level: p.level,
            order: p.order,
            start: TimeValue::from_jd(p.start_jd).to_datetime_utc(),
            end: TimeValue::from_jd(p.end_jd).to_datetime_utc(),
            start_jd: p.start_jd,
            end_jd: p.end_jd,
            duration_years: p.duration_years(),
            children: Vec::new(),
        }
    }

    pub fn from_node(node: &DashaNode) -> Self {
        Self {
            children: node.children.iter().map(Self::from_node).collect(),
            ..Self::from_period(&node.period)
        }
    }
}

/// One Bhukti together with the Mahadasha lord it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BhuktiView {
    pub maha_lord: Graha,
    #[serde(flatten)]
    pub period: DashaPeriodView,
}

/// Mahadashas from birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MahadashaSequence {
    pub mahadashas: Vec<DashaPeriodView>,
    /// True if the Moon longitude came from placeholder data.
    pub placeholder_data: bool,
}

/// Bhuktis of one Mahadasha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BhuktiList {
    pub mahadasha_index: usize,
    pub bhuktis: Vec<BhuktiView>,
    pub placeholder_data: bool,
}

/// Active dasha chain at a query moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CurrentDasha {
    Active {
        query: Instant,
        mahadasha: DashaPeriodView,
        bhukti: Option<DashaPeriodView>,
        pratyantar: Option<DashaPeriodView>,
    },
    /// Query before birth or past the generated sequence.
    OutOfRange {
        query: Instant,
        horizon_start: Instant,
        horizon_end: Instant,
    },
}

impl CurrentDasha {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn mahadasha(&self) -> Option<&DashaPeriodView> {
        match self {
            Self::Active { mahadasha, .. } => Some(mahadasha),
            Self::OutOfRange { .. } => None,
        }
    }
}

/// [`CurrentDasha`] plus the placeholder marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentDashaResponse {
    #[serde(flatten)]
    pub current: CurrentDasha,
    pub placeholder_data: bool,
}

/// Porutham result plus the placeholder marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub result: CompatibilityResult,
    /// True if either Moon longitude came from placeholder data.
    pub placeholder_data: bool,
}

/// One graha in the birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetView {
    pub graha: Graha,
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
    pub nakshatra: Nakshatra,
    /// Pada 1-4.
    pub pada: u8,
    /// Bhava 1-12.
    pub house: u8,
}

/// Sign occupied by one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RasiPlacement {
    pub graha: Graha,
    pub sign_index: u8,
    pub sign: Rashi,
    pub sign_name: &'static str,
    pub degrees_in_sign: f64,
}

/// Navamsa placement of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavamsaPlacement {
    pub graha: Graha,
    #[serde(flatten)]
    pub position: NavamsaPosition,
}

/// Equal-house frame at the birth place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HousesView {
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    pub cusps_deg: [f64; 12],
    /// Sign of the ascendant.
    pub lagna: Rashi,
    pub bhavas: [Bhava; 12],
}

/// Panchang elements plus the local weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangView {
    #[serde(flatten)]
    pub panchangam: Panchangam,
    pub vaar: Vaar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaView {
    /// Mahadashas, expanded to the configured depth.
    pub sequence: Vec<DashaPeriodView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentDasha>,
}

/// Full birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResponse {
    /// Birth moment after place resolution.
    pub birth: BirthMoment,
    pub time: Instant,
    pub planets: Vec<PlanetView>,
    pub rasi: Vec<RasiPlacement>,
    pub houses: HousesView,
    pub navamsa: Vec<NavamsaPlacement>,
    pub dasha: DashaView,
    pub panchangam: PanchangView,
    /// True if any position or house came from placeholder data.
    pub placeholder_data: bool,
}

impl ChartResponse {
    pub fn planet(&self, graha: Graha) -> Option<&PlanetView> {
        self.planets.iter().find(|p| p.graha == graha)
    }
}
