//! Golden positions for the built-in backends.
//!
//! Reference longitudes are tropical, geocentric, from published almanac
//! values; tolerances reflect the low-precision element model.

use kundli_core::{
    Body, FallbackProvider, GeoLocation, KeplerianProvider, PlaceholderProvider, PositionProvider,
    PositionSource, UnavailableProvider, angle_delta_deg,
};
use kundli_time::{BirthMoment, TimeValue};

fn lon(body: Body, jd: f64) -> f64 {
    KeplerianProvider
        .position(TimeValue::from_jd(jd), body)
        .unwrap()
        .longitude_deg
}

// ---------------------------------------------------------------------------
// Keplerian backend
// ---------------------------------------------------------------------------

#[test]
fn jupiter_new_year_2000() {
    // 2000-Jan-01 0h UT: Jupiter ≈ 25.2° (Aries)
    let l = lon(Body::Jupiter, 2_451_544.5);
    assert!(angle_delta_deg(25.2, l).abs() < 1.0, "jupiter = {l}");
}

#[test]
fn mars_opposition_2003() {
    // 2003-Aug-28: Mars at opposition ≈ 335° (5° Pisces), Sun opposite
    let mars = lon(Body::Mars, 2_452_879.5);
    let sun = lon(Body::Sun, 2_452_879.5);
    assert!(angle_delta_deg(335.1, mars).abs() < 1.0, "mars = {mars}");
    assert!((angle_delta_deg(sun, mars).abs() - 180.0).abs() < 1.5);
    let p = KeplerianProvider
        .position(TimeValue::from_jd(2_452_879.5), Body::Mars)
        .unwrap();
    assert!(p.is_retrograde(), "Mars retrograde at opposition");
    assert!(p.distance_au < 0.4);
}

#[test]
fn sun_at_march_equinox_2024() {
    // 2024-Mar-20 03:06 UT
    let t = BirthMoment::new(2024, 3, 20, 3, 6, 0.0).to_time_value().unwrap();
    let sun = KeplerianProvider.position(t, Body::Sun).unwrap();
    assert!(angle_delta_deg(0.0, sun.longitude_deg).abs() < 0.1, "sun = {}", sun.longitude_deg);
}

#[test]
fn moon_moves_about_13_deg_per_day() {
    let p = KeplerianProvider
        .position(TimeValue::from_jd(2_460_000.5), Body::Moon)
        .unwrap();
    assert!((11.5..15.5).contains(&p.speed_deg_per_day), "speed = {}", p.speed_deg_per_day);
}

#[test]
fn inner_planets_stay_near_sun() {
    for i in 0..50 {
        let jd = 2_451_545.0 + i as f64 * 73.1;
        let sun = lon(Body::Sun, jd);
        assert!(angle_delta_deg(sun, lon(Body::Mercury, jd)).abs() < 28.5);
        assert!(angle_delta_deg(sun, lon(Body::Venus, jd)).abs() < 48.0);
    }
}

#[test]
fn all_longitudes_normalized() {
    for i in 0..100 {
        let t = TimeValue::from_jd(2_415_020.5 + i as f64 * 365.0);
        for &body in Body::all() {
            let p = KeplerianProvider.position(t, body).unwrap();
            assert!((0.0..360.0).contains(&p.longitude_deg));
        }
    }
}

#[test]
fn chennai_houses_have_twelve_equal_cusps() {
    let t = BirthMoment::new(1990, 5, 15, 10, 0, 5.5).to_time_value().unwrap();
    let h = KeplerianProvider
        .houses(t, &GeoLocation::new(13.08, 80.27))
        .unwrap();
    assert_eq!(h.cusps_deg.len(), 12);
    assert_eq!(h.cusps_deg[0], h.ascendant_deg);
    for i in 1..12 {
        assert!((angle_delta_deg(h.cusps_deg[i - 1], h.cusps_deg[i]) - 30.0).abs() < 1e-9);
    }
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

#[test]
fn fallback_matches_placeholder_exactly() {
    let fb = FallbackProvider::new(UnavailableProvider::new("ephemeris offline"));
    let t = TimeValue::from_jd(2_448_026.687_5);
    for &body in Body::all() {
        let (p, src) = fb.position_with_source(t, body).unwrap();
        assert_eq!(src, PositionSource::Placeholder);
        assert_eq!(p, PlaceholderProvider.position(t, body).unwrap());
    }
}
