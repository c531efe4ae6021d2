//! Civil birth time to a continuous Julian-day time scale.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - `BirthMoment`, the validated civil input (local wall clock + UTC offset)
//! - `TimeValue`, the monotonic UT day number every other crate consumes
//! - GMST / local sidereal time for house computations
//! - A chrono bridge for RFC 3339 rendering

pub mod birth;
pub mod error;
pub mod julian;
pub mod sidereal;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use birth::BirthMoment;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, days_in_month,
    is_leap_year, jd_to_calendar, julian_centuries,
};
pub use sidereal::{
    earth_rotation_angle_rad, gmst_deg, gmst_rad, local_sidereal_time_at, local_sidereal_time_deg,
    local_sidereal_time_rad,
};

const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// A point on the continuous UT time scale, stored as a Julian Date.
///
/// Strictly monotonic with civil time: a later instant always carries a larger
/// day number. Immutable; arithmetic returns new values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeValue {
    jd_ut: f64,
}

impl TimeValue {
    /// Create a time value from a Julian Date (UT).
    pub fn from_jd(jd_ut: f64) -> Self {
        Self { jd_ut }
    }

    /// Julian Date (UT).
    pub fn jd(self) -> f64 {
        self.jd_ut
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd_ut: self.jd_ut + days,
        }
    }

    /// Days elapsed from `earlier` to `self`.
    pub fn days_since(self, earlier: TimeValue) -> f64 {
        self.jd_ut - earlier.jd_ut
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        julian_centuries(self.jd_ut)
    }

    /// Convert to a UTC timestamp, rounded to the millisecond.
    ///
    /// Returns `None` when the day number is non-finite or outside chrono's range.
    pub fn to_datetime_utc(self) -> Option<DateTime<Utc>> {
        if !self.jd_ut.is_finite() {
            return None;
        }
        let millis = ((self.jd_ut - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
        if millis.abs() > i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }

    /// Build from a UTC timestamp.
    pub fn from_datetime_utc(dt: DateTime<Utc>) -> Self {
        Self {
            jd_ut: UNIX_EPOCH_JD + dt.timestamp_millis() as f64 / MILLIS_PER_DAY,
        }
    }

    /// The current wall-clock instant, for queries that omit a time.
    pub fn now() -> Self {
        Self::from_datetime_utc(Utc::now())
    }
}
