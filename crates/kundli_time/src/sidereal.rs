//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! The chart engine works on a single UT day number, so UT1 − UTC is taken
//! as zero here (< 0.9 s, far below the resolution of any house cusp we emit).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use std::f64::consts::{PI, TAU};

use crate::TimeValue;
use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Arcseconds to radians: 1″ = π / (180 × 3600).
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a given UT Julian Date.
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du)
/// where Du = JD_UT − 2451545.0.
///
/// Returns radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given UT Julian Date.
///
/// GMST = ERA + polynomial(T), T = Julian centuries from J2000.0.
/// Returns radians in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude.
///
/// LST = GMST + longitude_east_rad, in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

/// Local Sidereal Time in radians for a time value and east longitude in degrees.
pub fn local_sidereal_time_at(t: TimeValue, longitude_east_deg: f64) -> f64 {
    local_sidereal_time_rad(gmst_rad(t.jd()), longitude_east_deg.to_radians())
}

/// GMST in degrees [0, 360).
pub fn gmst_deg(t: TimeValue) -> f64 {
    gmst_rad(t.jd()).to_degrees()
}

/// LST in degrees [0, 360).
pub fn local_sidereal_time_deg(t: TimeValue, longitude_east_deg: f64) -> f64 {
    local_sidereal_time_at(t, longitude_east_deg).to_degrees()
}
