//! Golden checks for sign, nakshatra, navamsa, panchang and porutham lookups.

use kundli_vedic::{
    Graha, Nakshatra, Paksha, Porutham, Rashi, Tithi, Verdict, equal_house_cusps, house_of,
    nakshatra_from_longitude, navamsa_position, panchangam, porutham, rashi_from_longitude,
};

#[test]
fn ninety_five_degrees() {
    let rashi = rashi_from_longitude(95.0);
    assert_eq!(rashi.rashi, Rashi::Karka);
    assert_eq!(rashi.rashi_index, 3);
    assert_eq!(rashi.dms.degrees, 5);

    let d9 = navamsa_position(95.0).unwrap();
    assert_eq!(d9.navamsa_sign.index(), 4);
    assert_eq!(d9.navamsa_sign, Rashi::Simha);

    let nak = nakshatra_from_longitude(95.0);
    assert_eq!(nak.nakshatra, Nakshatra::Pushya);
    assert_eq!(nak.pada, 1);
}

#[test]
fn navamsa_sign_in_range_and_periodic() {
    let mut lon = -720.0;
    while lon < 720.0 {
        let a = navamsa_position(lon).unwrap();
        let b = navamsa_position(lon + 360.0).unwrap();
        assert!(a.navamsa_sign.index() <= 11);
        assert_eq!(a.navamsa_sign, b.navamsa_sign, "lon {lon}");
        lon += 7.77;
    }
}

#[test]
fn vargottama_points() {
    // First navamsa of a movable sign, middle of fixed, last of dual
    assert_eq!(navamsa_position(1.0).unwrap().navamsa_sign, Rashi::Mesha);
    assert_eq!(navamsa_position(45.0).unwrap().navamsa_sign, Rashi::Vrishabha);
    assert_eq!(navamsa_position(89.0).unwrap().navamsa_sign, Rashi::Mithuna);
}

#[test]
fn full_moon_panchang() {
    // Sun 0°, Moon 180°: start of Krishna Pratipada, Moon in Chitra
    let p = panchangam(0.0, 180.0).unwrap();
    assert_eq!(p.tithi.tithi_index, 15);
    assert_eq!(p.tithi.tithi, Tithi::Pratipada);
    assert_eq!(p.tithi.paksha, Paksha::Krishna);
    assert_eq!(p.nakshatra.nakshatra, Nakshatra::Chitra);
    assert_eq!(p.nakshatra.lord, Graha::Mangal);
    assert_eq!(p.karana.karana_index, 30);
}

#[test]
fn house_of_matches_sign_offsets() {
    let cusps = equal_house_cusps(95.0).unwrap();
    assert_eq!(house_of(95.0, &cusps), Ok(1));
    assert_eq!(house_of(275.0, &cusps), Ok(7));
    assert_eq!(house_of(94.0, &cusps), Ok(12));
}

#[test]
fn same_moon_porutham() {
    let r = porutham(200.0, 200.0).unwrap();
    assert!(r.check(Porutham::SameNakshatra).is_some_and(|c| c.passed));
    assert_eq!(r.max_score, 9);
    assert!(r.score >= 1);
}

#[test]
fn porutham_json_shape() {
    let r = porutham(0.0, 40.0).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["score"], 6);
    assert_eq!(json["verdict"], Verdict::Good.label());
    assert_eq!(json["checks"][0]["porutham"], "same_nakshatra");
    assert_eq!(json["checks"].as_array().map(Vec::len), Some(9));
}
