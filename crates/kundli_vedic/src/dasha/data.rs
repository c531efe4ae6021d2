//! Vimshottari lord sequence and period lengths.

use crate::graha::Graha;

use super::types::DAYS_PER_YEAR;

/// Sum of all nine Mahadasha lengths.
pub const TOTAL_YEARS: f64 = 120.0;

/// Lords in dasha order with their full period in years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Position of a graha in the dasha order.
pub const fn sequence_position(lord: Graha) -> usize {
    match lord {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Vimshottari lord of a nakshatra (0 = Ashwini). Cycles every 9.
pub const fn vimshottari_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_SEQUENCE[(nakshatra_index % 9) as usize].0
}

/// Full Mahadasha length of a lord in years.
pub const fn years_of(lord: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE[sequence_position(lord)].1
}

/// Full Mahadasha length of a lord in days.
pub fn days_of(lord: Graha) -> f64 {
    years_of(lord) * DAYS_PER_YEAR
}

/// The nine lords in dasha order starting from `first`.
pub fn sequence_from(first: Graha) -> [(Graha, f64); 9] {
    let start = sequence_position(first);
    std::array::from_fn(|i| VIMSHOTTARI_SEQUENCE[(start + i) % 9])
}
