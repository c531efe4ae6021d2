//! Civil birth moment: local wall-clock date/time, UTC offset and place.

use serde::{Deserialize, Serialize};

use crate::TimeValue;
use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month};

/// Maximum UTC offset magnitude in hours (UTC+14 is the easternmost zone).
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Birth date and time as read off a local clock, plus the observer location.
///
/// The offset is the zone offset in effect at the moment (e.g. +5.5 for IST);
/// resolving a zone name to an offset happens outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub second: f64,
    pub utc_offset_hours: f64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl BirthMoment {
    /// Local date/time at the given offset, at latitude/longitude 0.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second: 0.0,
            utc_offset_hours,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// Set the observer location (degrees, north and east positive).
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Set the seconds field.
    pub fn with_second(mut self, second: f64) -> Self {
        self.second = second;
        self
    }

    /// Check every field against its civil range.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidMonth(self.month));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour >= 24 {
            return Err(TimeError::InvalidHour(self.hour));
        }
        if self.minute >= 60 {
            return Err(TimeError::InvalidMinute(self.minute));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidSecond(self.second));
        }
        if !self.utc_offset_hours.is_finite()
            || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(TimeError::InvalidUtcOffset(self.utc_offset_hours));
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(TimeError::InvalidLatitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(TimeError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }

    /// Fractional day of month for the local wall clock.
    fn local_day_frac(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0
    }

    /// Validate and convert to the UT day number.
    ///
    /// JD(UT) = JD(local wall clock) − offset / 24.
    pub fn to_time_value(&self) -> Result<TimeValue, TimeError> {
        self.validate()?;
        let local_jd = calendar_to_jd(self.year, self.month, self.local_day_frac());
        Ok(TimeValue::from_jd(local_jd - self.utc_offset_hours / 24.0))
    }
}
