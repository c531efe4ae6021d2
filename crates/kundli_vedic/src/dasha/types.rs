//! Core types for Vimshottari dasha (planetary period) calculations.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;

/// Year length used for all dasha durations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Deepest level generated (Mahadasha, Bhukti, Pratyantar).
pub const MAX_DASHA_DEPTH: u8 = 3;

/// Default elapsed-years horizon for the Mahadasha sequence.
pub const DEFAULT_SPAN_YEARS: f64 = 120.0;

/// Hard cap on Mahadashas in one sequence.
pub const MAX_MAHADASHAS: usize = 100;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Bhukti = 1,
    Pratyantar = 2,
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Bhukti),
            2 => Some(Self::Pratyantar),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Bhukti => "Bhukti",
            Self::Pratyantar => "Pratyantar",
        }
    }

    /// 1-based depth of this level (Mahadasha = 1).
    pub const fn depth(self) -> u8 {
        self as u8 + 1
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Bhukti),
            Self::Bhukti => Some(Self::Pratyantar),
            Self::Pratyantar => None,
        }
    }
}

/// A single dasha period. Start inclusive, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// Graha ruling the period.
    pub lord: Graha,
    pub level: DashaLevel,
    /// JD UT, inclusive.
    pub start_jd: f64,
    /// JD UT, exclusive.
    pub end_jd: f64,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Where the period would have started had it run at full length.
    /// Equals `start_jd` unless the period was cut short by the birth moment.
    pub nominal_start_jd: f64,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration of the period in dasha years (365.25 days).
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Whether `jd` lies in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }

    /// True when the period began before the birth moment.
    pub fn is_partial(&self) -> bool {
        self.nominal_start_jd < self.start_jd
    }
}

/// One period with its generated sub-periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaNode {
    pub period: DashaPeriod,
    pub children: Vec<DashaNode>,
}

/// How the first, already-running Mahadasha is subdivided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceSubdivision {
    /// Scale the nine children to the remaining balance.
    #[default]
    Proportional,
    /// Subdivide the full nominal period and drop what elapsed before birth.
    ElapsedClipped,
}

/// Generation options for a Vimshottari sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaOptions {
    /// Elapsed years from birth the Mahadasha sequence must cover.
    pub span_years: f64,
    /// Levels to generate, 1..=3.
    pub depth: u8,
    pub subdivision: BalanceSubdivision,
}

impl Default for DashaOptions {
    fn default() -> Self {
        Self {
            span_years: DEFAULT_SPAN_YEARS,
            depth: MAX_DASHA_DEPTH,
            subdivision: BalanceSubdivision::Proportional,
        }
    }
}

impl DashaOptions {
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.span_years.is_finite() || self.span_years <= 0.0 {
            return Err(VedicError::InvalidInput(
                "dasha span must be finite and positive",
            ));
        }
        if self.depth == 0 || self.depth > MAX_DASHA_DEPTH {
            return Err(VedicError::InvalidInput("dasha depth must be in 1..=3"));
        }
        Ok(())
    }
}

/// Complete hierarchy: `levels[0]` = Mahadashas, `levels[1]` = Bhuktis, ...
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaHierarchy {
    /// Birth JD UT.
    pub birth_jd: f64,
    pub levels: Vec<Vec<DashaPeriod>>,
}

/// Active periods at one moment, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    pub periods: Vec<DashaPeriod>,
}

impl DashaSnapshot {
    fn at(&self, level: DashaLevel) -> Option<&DashaPeriod> {
        self.periods.iter().find(|p| p.level == level)
    }

    pub fn mahadasha(&self) -> Option<&DashaPeriod> {
        self.at(DashaLevel::Mahadasha)
    }

    pub fn bhukti(&self) -> Option<&DashaPeriod> {
        self.at(DashaLevel::Bhukti)
    }

    pub fn pratyantar(&self) -> Option<&DashaPeriod> {
        self.at(DashaLevel::Pratyantar)
    }
}
