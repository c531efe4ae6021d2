//! Bhava (house) placement on equal cusps.
//!
//! A single house system is supported: equal houses from the Lagna, cusp 1 at
//! the ascendant and each subsequent cusp 30° further.

use serde::Serialize;

use crate::error::VedicError;
use crate::util::finite_longitude;

/// A single bhava (house).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bhava {
    /// House number, 1-12.
    pub number: u8,
    /// Ecliptic longitude of the cusp (start of the house), [0, 360).
    pub cusp_deg: f64,
    /// End of this bhava, [0, 360). Equals next bhava's cusp.
    pub end_deg: f64,
}

/// Forward arc from `a` to `b` in [0, 360).
fn arc_forward(a: f64, b: f64) -> f64 {
    (b - a).rem_euclid(360.0)
}

/// Twelve equal cusps starting at the ascendant.
pub fn equal_house_cusps(ascendant_deg: f64) -> Result<[f64; 12], VedicError> {
    let asc = finite_longitude(ascendant_deg)?;
    Ok(kundli_core::equal_cusps(asc))
}

/// Expand cusps into bhava records.
pub fn bhavas_from_cusps(cusps: &[f64; 12]) -> [Bhava; 12] {
    std::array::from_fn(|i| Bhava {
        number: i as u8 + 1,
        cusp_deg: cusps[i],
        end_deg: cusps[(i + 1) % 12],
    })
}

/// House number (1..=12) containing `lon_deg`, given cusps in house order.
///
/// A longitude exactly on a cusp belongs to the house that cusp opens.
pub fn house_of(lon_deg: f64, cusps: &[f64; 12]) -> Result<u8, VedicError> {
    let lon = finite_longitude(lon_deg)?;
    for i in 0..12 {
        let start = cusps[i];
        let width = arc_forward(start, cusps[(i + 1) % 12]);
        if arc_forward(start, lon) < width {
            return Ok(i as u8 + 1);
        }
    }
    // Degenerate cusps (all equal) collapse every point into house 1
    Ok(1)
}
