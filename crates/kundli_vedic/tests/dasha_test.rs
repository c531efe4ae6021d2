//! Integration tests for the Vimshottari dasha engine.

use kundli_vedic::dasha::{
    BalanceSubdivision, DAYS_PER_YEAR, DashaLevel, DashaOptions, VIMSHOTTARI_SEQUENCE,
    find_active_period, vimshottari_children, vimshottari_forest, vimshottari_hierarchy,
    vimshottari_mahadashas, vimshottari_snapshot,
};
use kundli_vedic::{Graha, NAKSHATRA_SPAN_27, VedicError};

const BIRTH_JD: f64 = 2_451_545.0;

/// Moon at 0° (start of Ashwini) → Ketu first, full 7 years.
#[test]
fn moon_at_zero_starts_full_ketu() {
    let level0 = vimshottari_mahadashas(BIRTH_JD, 0.0, 120.0).unwrap();
    assert_eq!(level0[0].lord, Graha::Ketu);
    assert_eq!(level0[0].level, DashaLevel::Mahadasha);
    assert_eq!(level0[0].order, 1);
    assert!((level0[0].duration_days() - 7.0 * 365.25).abs() < 1e-6);
    assert_eq!(level0[1].lord, Graha::Shukra);
    assert!((level0[1].duration_years() - 20.0).abs() < 1e-9);
}

/// Moon at 40° (Rohini) → Chandra with the full 10 year balance.
#[test]
fn moon_at_40_starts_chandra() {
    let level0 = vimshottari_mahadashas(BIRTH_JD, 40.0, 120.0).unwrap();
    assert_eq!(level0[0].lord, Graha::Chandra);
    assert!((level0[0].duration_years() - 10.0).abs() < 1e-9);
    assert_eq!(level0[1].lord, Graha::Mangal);
}

#[test]
fn lord_years_sum_to_120() {
    let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
    assert!((total - 120.0).abs() < 1e-12);
}

#[test]
fn mahadashas_share_exact_boundaries() {
    for moon in [0.0, 13.0, 77.7, 145.2, 250.0, 359.99] {
        let level0 = vimshottari_mahadashas(BIRTH_JD, moon, 120.0).unwrap();
        for w in level0.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd, "moon {moon}");
        }
        let last = level0[level0.len() - 1];
        assert!(last.end_jd >= BIRTH_JD + 120.0 * DAYS_PER_YEAR - 1e-6);
        assert!(level0.len() <= 11);
    }
}

#[test]
fn bhukti_durations_sum_to_parent() {
    let level0 = vimshottari_mahadashas(BIRTH_JD, 211.0, 120.0).unwrap();
    for md in &level0 {
        let bhuktis = vimshottari_children(md, BalanceSubdivision::Proportional);
        let sum: f64 = bhuktis.iter().map(|b| b.duration_days()).sum();
        let rel = (sum - md.duration_days()).abs() / md.duration_days();
        assert!(rel < 1e-9, "relative error {rel}");
        assert_eq!(bhuktis[0].lord, md.lord);
        for w in bhuktis.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
    }
}

/// Moon mid-Ashwini: Ketu has 3.5 of its 7 years left at birth.
/// Proportional subdivision scales all nine Bhuktis into the 3.5 years.
#[test]
fn first_period_proportional_fixture() {
    let moon = NAKSHATRA_SPAN_27 / 2.0;
    let md = vimshottari_mahadashas(BIRTH_JD, moon, 120.0).unwrap()[0];
    assert!((md.duration_years() - 3.5).abs() < 1e-9);

    let bhuktis = vimshottari_children(&md, BalanceSubdivision::Proportional);
    assert_eq!(bhuktis.len(), 9);
    assert_eq!(bhuktis[0].lord, Graha::Ketu);
    assert_eq!(bhuktis[0].start_jd, BIRTH_JD);
    assert!((bhuktis[0].duration_years() - 3.5 * 7.0 / 120.0).abs() < 1e-9);
}

/// Same birth under ElapsedClipped: the nominal 7-year Ketu period is cut at
/// birth, 3.5 years in, which falls inside the Ketu-Rahu Bhukti.
#[test]
fn first_period_elapsed_clipped_fixture() {
    let moon = NAKSHATRA_SPAN_27 / 2.0;
    let md = vimshottari_mahadashas(BIRTH_JD, moon, 120.0).unwrap()[0];

    let bhuktis = vimshottari_children(&md, BalanceSubdivision::ElapsedClipped);
    assert_eq!(bhuktis.len(), 4);
    assert_eq!(bhuktis[0].lord, Graha::Rahu);
    assert_eq!(bhuktis[0].order, 6);
    assert_eq!(bhuktis[0].start_jd, BIRTH_JD);
    assert!((bhuktis[0].duration_years() - (3.966_666_666_666_667 - 3.5)).abs() < 1e-6);
    let nominal_offset = (BIRTH_JD - bhuktis[0].nominal_start_jd) / DAYS_PER_YEAR;
    assert!((nominal_offset - (3.5 - 2.916_666_666_666_667)).abs() < 1e-6);
    assert_eq!(bhuktis[1].lord, Graha::Guru);
    assert_eq!(bhuktis[3].lord, Graha::Buddh);
    assert_eq!(bhuktis[3].end_jd, md.end_jd);

    let sum: f64 = bhuktis.iter().map(|b| b.duration_days()).sum();
    assert!((sum - md.duration_days()).abs() < 1e-6);
}

/// Later Mahadashas are not partial, so both rules agree on them.
#[test]
fn subdivision_rules_agree_after_first_period() {
    let moon = NAKSHATRA_SPAN_27 / 2.0;
    let level0 = vimshottari_mahadashas(BIRTH_JD, moon, 120.0).unwrap();
    for md in &level0[1..] {
        assert_eq!(
            vimshottari_children(md, BalanceSubdivision::Proportional),
            vimshottari_children(md, BalanceSubdivision::ElapsedClipped)
        );
    }
}

#[test]
fn forest_depth_follows_options() {
    let opts = DashaOptions {
        depth: 2,
        ..DashaOptions::default()
    };
    let forest = vimshottari_forest(BIRTH_JD, 0.0, &opts).unwrap();
    assert_eq!(forest.len(), 9);
    assert_eq!(forest[0].children.len(), 9);
    assert!(forest[0].children[0].children.is_empty());
}

#[test]
fn hierarchy_levels_are_contiguous() {
    let h = vimshottari_hierarchy(BIRTH_JD, 321.0, &DashaOptions::default()).unwrap();
    for level in &h.levels {
        for w in level.windows(2) {
            assert!((w[0].end_jd - w[1].start_jd).abs() < 1e-9);
        }
    }
}

#[test]
fn snapshot_elapsed_clipped_at_birth() {
    let opts = DashaOptions {
        subdivision: BalanceSubdivision::ElapsedClipped,
        ..DashaOptions::default()
    };
    let moon = NAKSHATRA_SPAN_27 / 2.0;
    let snap = vimshottari_snapshot(BIRTH_JD, moon, BIRTH_JD, &opts).unwrap();
    assert_eq!(snap.mahadasha().map(|p| p.lord), Some(Graha::Ketu));
    assert_eq!(snap.bhukti().map(|p| p.lord), Some(Graha::Rahu));
    assert!(snap.pratyantar().is_some());
}

#[test]
fn snapshot_outside_horizon_is_out_of_range() {
    let opts = DashaOptions::default();
    let level0 = vimshottari_mahadashas(BIRTH_JD, 0.0, 120.0).unwrap();
    let end = level0[level0.len() - 1].end_jd;
    assert_eq!(find_active_period(&level0, end), None);
    let err = vimshottari_snapshot(BIRTH_JD, 0.0, end + 10.0, &opts).unwrap_err();
    assert!(matches!(err, VedicError::OutOfRange { .. }));
}
