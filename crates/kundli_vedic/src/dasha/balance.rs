//! Birth balance: how much of the first Mahadasha remains at birth.
//!
//! Computed from the Moon's position within its nakshatra.

use crate::graha::Graha;
use crate::nakshatra::NAKSHATRA_SPAN_27;

use super::data::{days_of, vimshottari_lord};

/// Balance of the Mahadasha running at birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// 0-based nakshatra index of the Moon.
    pub nakshatra_index: u8,
    /// Lord of the starting Mahadasha.
    pub lord: Graha,
    /// Days of the starting Mahadasha remaining after birth.
    pub balance_days: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
}

impl BirthBalance {
    /// Days of the starting Mahadasha that elapsed before birth.
    pub fn elapsed_days(&self) -> f64 {
        days_of(self.lord) - self.balance_days
    }
}

/// Compute the birth balance for a Moon longitude already in [0, 360).
pub fn nakshatra_birth_balance(moon_lon: f64) -> BirthBalance {
    let nak_idx = ((moon_lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let position_in_nak = moon_lon - (nak_idx as f64) * NAKSHATRA_SPAN_27;
    let elapsed_fraction = (position_in_nak / NAKSHATRA_SPAN_27).clamp(0.0, 1.0);
    let lord = vimshottari_lord(nak_idx);
    BirthBalance {
        nakshatra_index: nak_idx,
        lord,
        balance_days: days_of(lord) * (1.0 - elapsed_fraction),
        elapsed_fraction,
    }
}
