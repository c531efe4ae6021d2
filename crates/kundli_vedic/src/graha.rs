//! Vedic planet (graha) enum, rashi lordship and natural friendship.
//!
//! Lordship and friendship follow the universal BPHS tables.

use kundli_core::Body;
use serde::{Deserialize, Serialize};

use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Provider body for this graha. Ketu has none: it is derived from Rahu.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Surya => Some(Body::Sun),
            Self::Chandra => Some(Body::Moon),
            Self::Mangal => Some(Body::Mars),
            Self::Buddh => Some(Body::Mercury),
            Self::Guru => Some(Body::Jupiter),
            Self::Shukra => Some(Body::Venus),
            Self::Shani => Some(Body::Saturn),
            Self::Rahu => Some(Body::MeanNode),
            Self::Ketu => None,
        }
    }

    /// Parse a Sanskrit or English name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_GRAHAS.iter().copied().find(|g| {
            g.name().eq_ignore_ascii_case(name) || g.english_name().eq_ignore_ascii_case(name)
        })
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal
/// - Vrishabha/Tula → Shukra
/// - Mithuna/Kanya → Buddh
/// - Karka → Chandra
/// - Simha → Surya
/// - Dhanu/Meena → Guru
/// - Makara/Kumbha → Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

/// Get the lord of a rashi by 0-based index. Returns None if index >= 12.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    ALL_RASHIS.get(rashi_index as usize).map(|&r| rashi_lord(r))
}

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// How `graha` regards `other` in the natural (naisargika) friendship table.
///
/// The table is asymmetric: Moon treats no one as an enemy, while Mercury
/// treats the Moon as one. Pairings involving Rahu/Ketu are Neutral.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        (Chandra, Surya | Buddh) => Friend,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn bodies_present_except_ketu() {
        for g in ALL_GRAHAS {
            assert_eq!(g.body().is_none(), g == Graha::Ketu, "{}", g.name());
        }
        assert_eq!(Graha::Rahu.body(), Some(Body::MeanNode));
    }

    #[test]
    fn from_name_accepts_both_languages() {
        assert_eq!(Graha::from_name("shani"), Some(Graha::Shani));
        assert_eq!(Graha::from_name("Saturn"), Some(Graha::Shani));
        assert_eq!(Graha::from_name("Pluto"), None);
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Mithuna), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Kanya), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Dhanu), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn rashi_lord_by_index_bounds() {
        assert_eq!(rashi_lord_by_index(4), Some(Graha::Surya));
        assert_eq!(rashi_lord_by_index(12), None);
    }

    #[test]
    fn friendship_is_asymmetric() {
        assert_eq!(
            naisargika_maitri(Graha::Buddh, Graha::Chandra),
            NaisargikaMaitri::Enemy
        );
        assert_eq!(
            naisargika_maitri(Graha::Chandra, Graha::Buddh),
            NaisargikaMaitri::Friend
        );
    }

    #[test]
    fn moon_has_no_enemies() {
        for g in ALL_GRAHAS {
            assert_ne!(naisargika_maitri(Graha::Chandra, g), NaisargikaMaitri::Enemy);
        }
    }

    #[test]
    fn nodes_are_neutral() {
        assert_eq!(
            naisargika_maitri(Graha::Rahu, Graha::Surya),
            NaisargikaMaitri::Neutral
        );
    }
}
