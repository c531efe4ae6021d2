//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Longitude is NaN/infinite, or outside the range an operation requires.
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),
    /// A non-longitude argument is out of its domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Query time falls outside the generated dasha horizon.
    #[error("JD {query_jd} outside dasha horizon [{start_jd}, {end_jd})")]
    OutOfRange {
        query_jd: f64,
        start_jd: f64,
        end_jd: f64,
    },
}
