//! Porutham: nakshatra-based compatibility between two birth charts.
//!
//! Person A is the reference chart. Counts run from A's nakshatra (or rashi)
//! to B's, inclusive, so the same nakshatra counts as 1. Every check is
//! worth one point.

use serde::Serialize;

use crate::error::VedicError;
use crate::graha::{NaisargikaMaitri, naisargika_maitri, rashi_lord};
use crate::nakshatra::{Nakshatra, count_nakshatras_forward, nakshatra_index};
use crate::rashi::{Rashi, count_signs_forward, sign_index};

/// The named compatibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Porutham {
    SameNakshatra,
    Dina,
    Gana,
    Mahendra,
    StreeDeergha,
    Rasi,
    RasiAdhipathi,
    Rajju,
    Vedha,
}

/// All checks in evaluation order.
pub const ALL_PORUTHAMS: [Porutham; 9] = [
    Porutham::SameNakshatra,
    Porutham::Dina,
    Porutham::Gana,
    Porutham::Mahendra,
    Porutham::StreeDeergha,
    Porutham::Rasi,
    Porutham::RasiAdhipathi,
    Porutham::Rajju,
    Porutham::Vedha,
];

impl Porutham {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SameNakshatra => "Same Nakshatra",
            Self::Dina => "Dina",
            Self::Gana => "Gana",
            Self::Mahendra => "Mahendra",
            Self::StreeDeergha => "Stree Deergha",
            Self::Rasi => "Rasi",
            Self::RasiAdhipathi => "Rasi Adhipathi",
            Self::Rajju => "Rajju",
            Self::Vedha => "Vedha",
        }
    }
}

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

const DEVA: [u8; 9] = [0, 4, 6, 7, 12, 14, 16, 21, 26];
const MANUSHYA: [u8; 9] = [1, 3, 5, 10, 11, 19, 20, 24, 25];

/// Gana of a nakshatra index (wraps modulo 27).
pub fn gana_of(nakshatra_index: u8) -> Gana {
    let idx = nakshatra_index % 27;
    if DEVA.contains(&idx) {
        Gana::Deva
    } else if MANUSHYA.contains(&idx) {
        Gana::Manushya
    } else {
        Gana::Rakshasa
    }
}

/// Body-part group of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rajju {
    Pada,
    Kati,
    Nabhi,
    Kantha,
    Siro,
}

const RAJJU_CYCLE: [Rajju; 9] = [
    Rajju::Pada,
    Rajju::Kati,
    Rajju::Nabhi,
    Rajju::Kantha,
    Rajju::Siro,
    Rajju::Kantha,
    Rajju::Nabhi,
    Rajju::Kati,
    Rajju::Pada,
];

/// Rajju of a nakshatra index; the pattern repeats every 9 nakshatras.
pub const fn rajju_of(nakshatra_index: u8) -> Rajju {
    RAJJU_CYCLE[(nakshatra_index % 9) as usize]
}

const VEDHA_PAIRS: [(u8, u8); 15] = [
    (0, 17),
    (1, 16),
    (2, 15),
    (3, 14),
    (5, 21),
    (6, 20),
    (7, 19),
    (8, 18),
    (9, 26),
    (10, 25),
    (11, 24),
    (12, 23),
    (4, 22),
    (13, 22),
    (4, 13),
];

/// Whether two nakshatras obstruct each other. Symmetric.
pub fn is_vedha_pair(a: u8, b: u8) -> bool {
    VEDHA_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoruthamCheck {
    pub porutham: Porutham,
    pub passed: bool,
    pub points: u8,
}

/// Overall verdict band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    #[serde(rename = "Excellent match")]
    Excellent,
    #[serde(rename = "Good match")]
    Good,
    #[serde(rename = "Average match")]
    Average,
    #[serde(rename = "Not recommended")]
    NotRecommended,
}

impl Verdict {
    /// Band for a total score out of 9.
    pub const fn from_score(score: u8) -> Self {
        match score {
            7.. => Self::Excellent,
            5..=6 => Self::Good,
            3..=4 => Self::Average,
            _ => Self::NotRecommended,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent match",
            Self::Good => "Good match",
            Self::Average => "Average match",
            Self::NotRecommended => "Not recommended",
        }
    }
}

/// Full porutham result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    /// Nakshatra of person A's Moon.
    pub nakshatra_a: Nakshatra,
    /// Nakshatra of person B's Moon.
    pub nakshatra_b: Nakshatra,
    pub rashi_a: Rashi,
    pub rashi_b: Rashi,
    pub checks: Vec<PoruthamCheck>,
    pub score: u8,
    pub max_score: u8,
    pub verdict: Verdict,
}

impl CompatibilityResult {
    /// Look up one named check.
    pub fn check(&self, porutham: Porutham) -> Option<&PoruthamCheck> {
        self.checks.iter().find(|c| c.porutham == porutham)
    }
}

fn evaluate(porutham: Porutham, nak_a: u8, nak_b: u8, sign_a: u8, sign_b: u8) -> bool {
    let count = count_nakshatras_forward(nak_a, nak_b);
    match porutham {
        Porutham::SameNakshatra => nak_a == nak_b,
        Porutham::Dina => (count % 9) % 2 == 0,
        Porutham::Gana => {
            let (ga, gb) = (gana_of(nak_a), gana_of(nak_b));
            ga == gb
                || matches!(
                    (ga, gb),
                    (Gana::Deva, Gana::Manushya) | (Gana::Manushya, Gana::Deva)
                )
        }
        Porutham::Mahendra => count >= 4 && (count - 4) % 3 == 0 && count <= 25,
        Porutham::StreeDeergha => count > 13,
        Porutham::Rasi => !matches!(count_signs_forward(sign_a, sign_b), 2 | 6 | 8 | 12),
        Porutham::RasiAdhipathi => {
            let la = rashi_lord(Rashi::from_index(sign_a));
            let lb = rashi_lord(Rashi::from_index(sign_b));
            la == lb
                || (naisargika_maitri(la, lb) != NaisargikaMaitri::Enemy
                    && naisargika_maitri(lb, la) != NaisargikaMaitri::Enemy)
        }
        Porutham::Rajju => rajju_of(nak_a) != rajju_of(nak_b),
        Porutham::Vedha => !is_vedha_pair(nak_a, nak_b),
    }
}

/// Score two Moon longitudes (A = reference) across all nine checks.
pub fn porutham(moon_a_deg: f64, moon_b_deg: f64) -> Result<CompatibilityResult, VedicError> {
    let nak_a = nakshatra_index(moon_a_deg)?;
    let nak_b = nakshatra_index(moon_b_deg)?;
    let sign_a = sign_index(moon_a_deg)?;
    let sign_b = sign_index(moon_b_deg)?;

    let checks: Vec<PoruthamCheck> = ALL_PORUTHAMS
        .iter()
        .map(|&p| {
            let passed = evaluate(p, nak_a, nak_b, sign_a, sign_b);
            PoruthamCheck {
                porutham: p,
                passed,
                points: u8::from(passed),
            }
        })
        .collect();
    let score: u8 = checks.iter().map(|c| c.points).sum();

    Ok(CompatibilityResult {
        nakshatra_a: Nakshatra::from_index(nak_a),
        nakshatra_b: Nakshatra::from_index(nak_b),
        rashi_a: Rashi::from_index(sign_a),
        rashi_b: Rashi::from_index(sign_b),
        max_score: ALL_PORUTHAMS.len() as u8,
        verdict: Verdict::from_score(score),
        checks,
        score,
    })
}
