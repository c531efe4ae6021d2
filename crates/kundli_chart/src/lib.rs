//! Chart orchestration for the kundli engine.
//!
//! Turns a birth moment into a full chart response (positions, signs,
//! houses, navamsa, dasha, panchang) and answers dasha and compatibility
//! queries. All operations take the position provider explicitly:
//!
//! ```ignore
//! let chart = generate_chart(&KeplerianProvider, &ChartRequest::birth(moment), &config)?;
//! ```

pub mod chart;
pub mod chart_types;
pub mod config;
pub mod error;
pub mod place;
pub mod snapshot;

pub use chart::{
    bhuktis, current_dasha, generate_chart, generate_chart_with, mahadasha_sequence, match_charts,
};
pub use chart_types::{
    BhuktiList, BhuktiView, ChartInput, ChartRequest, ChartResponse, CurrentDasha,
    CurrentDashaResponse, DashaPeriodView, DashaView, HousesView, Instant, MahadashaSequence,
    MatchResponse, MatchSubject, NavamsaPlacement, PanchangView, PlanetView, RasiPlacement,
};
pub use config::{ChartConfig, PlaceEntry};
pub use error::{ChartError, ValidationError};
pub use place::{PlaceResolver, PlaceTable};
pub use snapshot::{ChartSnapshot, GrahaPosition};
