//! Panchang elements derived from the Sun and Moon longitudes.
//!
//! - tithi: `floor((moon - sun) / 12)`, 30 per synodic month
//! - karana: `floor((moon - sun) / 6)`, 60 per synodic month
//! - yoga: `floor((sun + moon) / (360/27))`, 27 per cycle
//! - nakshatra: `floor(moon / (360/27))`
//!
//! All angles are normalized into [0, 360) first. Vaar (weekday) depends only
//! on the Julian Day.

use serde::Serialize;

use crate::dasha::vimshottari_lord;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN_27, Nakshatra, nakshatra_from_longitude};
use crate::util::finite_longitude;

/// Angular span of one tithi.
pub const TITHI_SPAN: f64 = 12.0;
/// Angular span of one karana (half a tithi).
pub const KARANA_SPAN: f64 = 6.0;
/// Angular span of one yoga.
pub const YOGA_SPAN: f64 = NAKSHATRA_SPAN_27;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing half, tithis 1-15.
    Shukla,
    /// Waning half, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names. Positions 1-14 repeat in both pakshas; the 15th is
/// Purnima in Shukla and Amavasya in Krishna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

const TITHI_CYCLE: [Tithi; 14] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Tithi for a 0-based index in the synodic month (0..=29, wraps).
    pub const fn from_index(index: u8) -> Self {
        let index = index % 30;
        match index {
            14 => Self::Purnima,
            29 => Self::Amavasya,
            _ => TITHI_CYCLE[(index % 15) as usize],
        }
    }
}

/// Tithi placement of one Sun/Moon pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees already elapsed inside the current tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Tithi from the Moon-Sun elongation in degrees (any finite value).
pub fn tithi_from_elongation(elongation_deg: f64) -> Result<TithiPosition, VedicError> {
    let elong = finite_longitude(elongation_deg)?;
    let index = ((elong / TITHI_SPAN).floor() as u8).min(29);
    let paksha = if index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    Ok(TithiPosition {
        tithi: Tithi::from_index(index),
        tithi_index: index,
        paksha,
        tithi_in_paksha: index % 15 + 1,
        degrees_in_tithi: elong - index as f64 * TITHI_SPAN,
    })
}

/// The 27 nitya yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order.
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Yoga placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
}

/// Yoga from the sum of Sun and Moon longitudes (any finite value).
pub fn yoga_from_sum(sum_deg: f64) -> Result<YogaPosition, VedicError> {
    let sum = finite_longitude(sum_deg)?;
    let index = ((sum / YOGA_SPAN).floor() as u8).min(26);
    Ok(YogaPosition {
        yoga: ALL_YOGAS[index as usize],
        yoga_index: index,
    })
}

/// Karana names: seven movable karanas cycle eight times; four fixed ones
/// sit at the ends of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kimstughna => "Kimstughna",
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
        }
    }

    /// Karana for a 0-based sequence index in the synodic month (0..=59, wraps).
    pub const fn from_index(index: u8) -> Self {
        match index % 60 {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            i => MOVABLE_KARANAS[((i - 1) % 7) as usize],
        }
    }

    /// Fixed (sthira) karanas occur once per month.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Kimstughna | Self::Shakuni | Self::Chatushpada | Self::Naga
        )
    }
}

/// Karana placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0-based karana sequence index (0..59).
    pub karana_index: u8,
}

/// Karana from the Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> Result<KaranaPosition, VedicError> {
    let elong = finite_longitude(elongation_deg)?;
    let index = ((elong / KARANA_SPAN).floor() as u8).min(59);
    Ok(KaranaPosition {
        karana: Karana::from_index(index),
        karana_index: index,
    })
}

/// Weekday, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// Planetary lord of the weekday.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somvaar => Graha::Chandra,
            Self::Mangalvaar => Graha::Mangal,
            Self::Budhvaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }
}

/// Civil weekday of a Julian Day (days roll over at 0h UT).
pub fn vaar_from_jd(jd: f64) -> Result<Vaar, VedicError> {
    if !jd.is_finite() {
        return Err(VedicError::InvalidInput("julian day must be finite"));
    }
    let day = (jd + 1.5).floor().rem_euclid(7.0) as usize;
    Ok(ALL_VAARS[day.min(6)])
}

/// Moon nakshatra as reported in a panchangam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangNakshatra {
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index (0..26).
    pub nakshatra_index: u8,
    /// Pada 1-4.
    pub pada: u8,
    /// Vimshottari lord of the nakshatra.
    pub lord: Graha,
}

/// Panchang elements for one Sun/Moon pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Panchangam {
    pub tithi: TithiPosition,
    pub nakshatra: PanchangNakshatra,
    pub yoga: YogaPosition,
    pub karana: KaranaPosition,
}

/// Compute tithi, nakshatra, yoga and karana from Sun and Moon longitudes.
pub fn panchangam(sun_deg: f64, moon_deg: f64) -> Result<Panchangam, VedicError> {
    let sun = finite_longitude(sun_deg)?;
    let moon = finite_longitude(moon_deg)?;
    let elongation = moon - sun;

    let nak = nakshatra_from_longitude(moon);
    Ok(Panchangam {
        tithi: tithi_from_elongation(elongation)?,
        nakshatra: PanchangNakshatra {
            nakshatra: nak.nakshatra,
            nakshatra_index: nak.nakshatra_index,
            pada: nak.pada,
            lord: vimshottari_lord(nak.nakshatra_index),
        },
        yoga: yoga_from_sum(sun + moon)?,
        karana: karana_from_elongation(elongation)?,
    })
}
