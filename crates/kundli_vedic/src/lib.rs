//! Pure-math Vedic layer built on position-provider longitudes.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra classification
//! - Navamsa (D9) placement
//! - Equal-house bhava placement
//! - Panchang elements (tithi, nakshatra, yoga, karana, vaar)
//! - Vimshottari dasha (Mahadasha, Bhukti, Pratyantar)
//! - Porutham compatibility scoring
//!
//! Every function here is deterministic over its inputs; no ephemeris access
//! happens in this crate.

pub mod bhava;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod navamsa;
pub mod panchang;
pub mod porutham;
pub mod rashi;
pub mod util;

pub use bhava::{Bhava, bhavas_from_cusps, equal_house_cusps, house_of};
pub use dasha::{
    BalanceSubdivision, DashaHierarchy, DashaLevel, DashaNode, DashaOptions, DashaPeriod,
    DashaSnapshot, dasha_tree, find_active_period, vimshottari_children, vimshottari_forest,
    vimshottari_hierarchy, vimshottari_lord, vimshottari_mahadashas, vimshottari_snapshot,
};
pub use error::VedicError;
pub use graha::{
    ALL_GRAHAS, Graha, NaisargikaMaitri, naisargika_maitri, rashi_lord, rashi_lord_by_index,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    count_nakshatras_forward, nakshatra_from_longitude, nakshatra_index,
};
pub use navamsa::{NAVAMSA_SPAN, NavamsaPosition, navamsa_longitude, navamsa_position};
pub use panchang::{
    Karana, KaranaPosition, Paksha, PanchangNakshatra, Panchangam, Tithi, TithiPosition, Vaar,
    Yoga, YogaPosition, karana_from_elongation, panchangam, tithi_from_elongation, vaar_from_jd,
    yoga_from_sum,
};
pub use porutham::{
    CompatibilityResult, Gana, Porutham, PoruthamCheck, Rajju, Verdict, gana_of, is_vedha_pair,
    porutham, rajju_of,
};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, SignType, count_signs_forward, deg_to_dms, dms_to_deg,
    rashi_from_longitude, sign_index, sign_type, try_rashi_from_longitude,
};
pub use util::normalize_360;
