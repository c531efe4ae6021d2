//! Navamsa (D9) divisional placement.
//!
//! Each sign is cut into 9 parts of 3°20'. The first navamsa of a sign is:
//! - movable sign: the sign itself
//! - fixed sign: the 9th sign from it (offset +8)
//! - dual sign: the 5th sign from it (offset +4)
//!
//! and the remaining eight follow in zodiacal order.

use serde::Serialize;

use crate::error::VedicError;
use crate::rashi::{Rashi, SignType, sign_type};
use crate::util::finite_longitude;

/// Span of one navamsa: 30/9 = 3.3333... degrees.
pub const NAVAMSA_SPAN: f64 = 30.0 / 9.0;

/// D9 placement of one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavamsaPosition {
    /// Rashi of the input longitude.
    pub source_sign: Rashi,
    /// Rashi occupied in the navamsa chart.
    pub navamsa_sign: Rashi,
    /// Which of the 9 parts of the source sign (0..=8).
    pub navamsa_index: u8,
    /// Position inside the navamsa sign, degrees [0, 30).
    pub navamsa_degree: f64,
}

const fn first_navamsa_offset(source_sign: u8) -> u8 {
    match sign_type(source_sign) {
        SignType::Movable => 0,
        SignType::Fixed => 8,
        SignType::Dual => 4,
    }
}

/// Navamsa placement of an ecliptic longitude.
///
/// Any finite input is accepted and wrapped into [0, 360) first, so the
/// result is invariant under `lon + 360k`.
pub fn navamsa_position(lon_deg: f64) -> Result<NavamsaPosition, VedicError> {
    let lon = finite_longitude(lon_deg)?;
    let sign = ((lon / 30.0).floor() as u8).min(11);
    let degree_in_sign = lon - sign as f64 * 30.0;
    // Clamp at the floating edge just below the next sign
    let index = ((degree_in_sign / NAVAMSA_SPAN).floor() as u8).min(8);
    let navamsa_sign = (sign + first_navamsa_offset(sign) + index) % 12;
    let navamsa_degree = ((degree_in_sign - index as f64 * NAVAMSA_SPAN) * 9.0).clamp(0.0, 30.0);

    Ok(NavamsaPosition {
        source_sign: Rashi::from_index(sign),
        navamsa_sign: Rashi::from_index(navamsa_sign),
        navamsa_index: index,
        navamsa_degree: if navamsa_degree >= 30.0 { 0.0 } else { navamsa_degree },
    })
}

/// Navamsa longitude on the full circle: `navamsa_sign * 30 + navamsa_degree`.
pub fn navamsa_longitude(lon_deg: f64) -> Result<f64, VedicError> {
    let pos = navamsa_position(lon_deg)?;
    Ok(pos.navamsa_sign.index() as f64 * 30.0 + pos.navamsa_degree)
}
