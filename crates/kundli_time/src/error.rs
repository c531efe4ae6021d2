//! Error types for birth-time validation and conversion.

use thiserror::Error;

/// Errors from birth-moment validation or time-scale conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
    /// Day outside the valid range for the given month and year.
    #[error("invalid day: {year:04}-{month:02}-{day:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour outside 0..24.
    #[error("invalid hour: {0} (expected 0-23)")]
    InvalidHour(u32),
    /// Minute outside 0..60.
    #[error("invalid minute: {0} (expected 0-59)")]
    InvalidMinute(u32),
    /// Second outside [0, 60).
    #[error("invalid second: {0} (expected [0, 60))")]
    InvalidSecond(f64),
    /// UTC offset outside [-14, 14] hours.
    #[error("invalid UTC offset: {0} h (expected -14..=14)")]
    InvalidUtcOffset(f64),
    /// Latitude outside [-90, 90].
    #[error("invalid latitude: {0} deg")]
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180].
    #[error("invalid longitude: {0} deg")]
    InvalidLongitude(f64),
    /// Malformed date/time text.
    #[error("parse error: {0}")]
    Parse(String),
}
