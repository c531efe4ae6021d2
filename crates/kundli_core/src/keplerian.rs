//! Low-precision ephemeris from mean Keplerian elements.
//!
//! Planets: J2000 mean elements with linear rates per Julian century
//! (JPL "Approximate Positions of the Planets", Table 1), solved for the
//! heliocentric ecliptic J2000 position, made geocentric by subtracting the
//! Earth–Moon barycentre, then precessed to the equinox of date.
//!
//! Moon and mean node: truncated Meeus series (see the `lunar` module).
//!
//! Speeds: central difference of the longitude over ±1 hour.
//!
//! Accuracy is of order arc-minutes for the planets inside 1800–2050 and
//! degrades slowly outside; the backend refuses times outside 1000–3000 CE.
//! UT is used in place of TT (ΔT is about a minute; negligible here).

use std::f64::consts::TAU;

use kundli_time::{TimeValue, local_sidereal_time_at};
use log::debug;

use crate::error::ProviderError;
use crate::lunar::{MEAN_MOON_DISTANCE_AU, mean_node_deg, moon_position};
use crate::types::{GeoLocation, HouseFrame, PlanetPosition, angle_delta_deg, normalize_deg};
use crate::{Body, PositionProvider};

/// 1000-Jan-01 0h.
pub const VALID_FROM_JD: f64 = 2_086_302.5;
/// 3000-Jan-01 0h.
pub const VALID_TO_JD: f64 = 2_816_787.5;

/// Half-width of the speed difference window, days.
const SPEED_STEP_DAYS: f64 = 1.0 / 24.0;

/// General precession in longitude, degrees per Julian century.
const PRECESSION_DEG_PER_CENTURY: f64 = 5_028.796_195 / 3600.0;

/// Mean Keplerian elements at J2000 and their rates per Julian century.
///
/// Fields: a (AU), e, I (deg), L (deg), ϖ longitude of perihelion (deg),
/// Ω longitude of ascending node (deg).
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    i: (f64, f64),
    l: (f64, f64),
    peri: (f64, f64),
    node: (f64, f64),
}

const MERCURY: Elements = Elements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    i: (7.004_979_02, -0.005_947_49),
    l: (252.250_323_50, 149_472.674_111_75),
    peri: (77.457_796_28, 0.160_476_89),
    node: (48.330_765_93, -0.125_340_81),
};

const VENUS: Elements = Elements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    i: (3.394_676_05, -0.000_788_90),
    l: (181.979_099_50, 58_517.815_387_29),
    peri: (131.602_467_18, 0.002_683_29),
    node: (76.679_842_55, -0.277_694_18),
};

const EARTH_MOON_BARY: Elements = Elements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    i: (-0.000_015_31, -0.012_946_68),
    l: (100.464_571_66, 35_999.372_449_81),
    peri: (102.937_681_93, 0.323_273_64),
    node: (0.0, 0.0),
};

const MARS: Elements = Elements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    i: (1.849_691_42, -0.008_131_31),
    l: (-4.553_432_05, 19_140.302_684_99),
    peri: (-23.943_629_59, 0.444_410_88),
    node: (49.559_538_91, -0.292_573_43),
};

const JUPITER: Elements = Elements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    i: (1.304_396_95, -0.001_837_14),
    l: (34.396_440_51, 3_034.746_127_75),
    peri: (14.728_479_83, 0.212_526_68),
    node: (100.473_909_09, 0.204_691_06),
};

const SATURN: Elements = Elements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    i: (2.485_991_87, 0.001_936_09),
    l: (49.954_244_23, 1_222.493_622_01),
    peri: (92.598_878_31, -0.418_972_16),
    node: (113.662_424_48, -0.288_677_94),
};

/// Solve Kepler's equation E − e·sin E = M (radians) by Newton iteration.
fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut ecc_anom = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..50 {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric ecliptic J2000 position (AU) from elements at `t` centuries.
fn heliocentric(el: &Elements, t: f64) -> [f64; 3] {
    let at = |(v0, rate): (f64, f64)| v0 + rate * t;
    let a = at(el.a);
    let e = at(el.e);
    let i = at(el.i).to_radians();
    let l = at(el.l);
    let peri = at(el.peri);
    let node = at(el.node);

    let omega = (peri - node).to_radians();
    let m = (l - peri).to_radians().rem_euclid(TAU);
    let big_omega = node.to_radians();

    let ecc_anom = solve_kepler(m, e);
    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = big_omega.sin_cos();
    let (si, ci) = i.sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Cartesian → (longitude deg [0, 360), latitude deg, distance).
fn to_spherical(v: [f64; 3]) -> (f64, f64, f64) {
    let [x, y, z] = v;
    let r = (x * x + y * y + z * z).sqrt();
    let lon = normalize_deg(y.atan2(x).to_degrees());
    let lat = if r > 0.0 { (z / r).asin().to_degrees() } else { 0.0 };
    (lon, lat, r)
}

/// Mean obliquity of the ecliptic of date, degrees (IAU 2006, linear term).
fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_279_444 - 0.013_010_213 * t
}

/// Low-precision Keplerian ephemeris backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeplerianProvider;

impl KeplerianProvider {
    pub fn new() -> Self {
        Self
    }

    fn check_time(t: TimeValue) -> Result<(), ProviderError> {
        let jd = t.jd();
        if !jd.is_finite() {
            return Err(ProviderError::InvalidTime {
                jd_ut: jd,
                reason: "non-finite",
            });
        }
        if !(VALID_FROM_JD..VALID_TO_JD).contains(&jd) {
            return Err(ProviderError::InvalidTime {
                jd_ut: jd,
                reason: "outside 1000-3000 CE",
            });
        }
        Ok(())
    }

    /// (longitude, latitude, distance) of date without speed.
    fn spherical(t: TimeValue, body: Body) -> (f64, f64, f64) {
        let c = t.centuries_since_j2000();
        let planet = |el: &Elements| {
            let p = heliocentric(el, c);
            let earth = heliocentric(&EARTH_MOON_BARY, c);
            let (lon, lat, r) = to_spherical([p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]);
            (normalize_deg(lon + PRECESSION_DEG_PER_CENTURY * c), lat, r)
        };
        match body {
            Body::Sun => {
                let earth = heliocentric(&EARTH_MOON_BARY, c);
                let (lon, lat, r) = to_spherical([-earth[0], -earth[1], -earth[2]]);
                (normalize_deg(lon + PRECESSION_DEG_PER_CENTURY * c), lat, r)
            }
            Body::Moon => moon_position(c),
            Body::Mercury => planet(&MERCURY),
            Body::Venus => planet(&VENUS),
            Body::Mars => planet(&MARS),
            Body::Jupiter => planet(&JUPITER),
            Body::Saturn => planet(&SATURN),
            Body::MeanNode => (mean_node_deg(c), 0.0, MEAN_MOON_DISTANCE_AU),
        }
    }
}

impl PositionProvider for KeplerianProvider {
    fn name(&self) -> &'static str {
        "keplerian"
    }

    fn position(&self, t: TimeValue, body: Body) -> Result<PlanetPosition, ProviderError> {
        Self::check_time(t)?;
        let (lon, lat, dist) = Self::spherical(t, body);
        let (before, _, _) = Self::spherical(t.add_days(-SPEED_STEP_DAYS), body);
        let (after, _, _) = Self::spherical(t.add_days(SPEED_STEP_DAYS), body);
        let speed = angle_delta_deg(before, after) / (2.0 * SPEED_STEP_DAYS);
        Ok(PlanetPosition {
            body,
            longitude_deg: lon,
            latitude_deg: lat,
            distance_au: dist,
            speed_deg_per_day: speed,
        })
    }

    fn houses(&self, t: TimeValue, location: &GeoLocation) -> Result<HouseFrame, ProviderError> {
        Self::check_time(t)?;
        location.validate()?;
        let lst = local_sidereal_time_at(t, location.longitude_deg);
        let eps = mean_obliquity_deg(t.centuries_since_j2000()).to_radians();
        let phi = location.latitude_rad();

        // Ascendant: the ecliptic point rising on the eastern horizon.
        let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
        let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());
        let frame = HouseFrame::equal(
            asc.rem_euclid(TAU).to_degrees(),
            mc.rem_euclid(TAU).to_degrees(),
        );
        debug!(
            "houses at JD {:.5}: LST {:.4} deg, asc {:.4}, mc {:.4}",
            t.jd(),
            lst.to_degrees(),
            frame.ascendant_deg,
            frame.mc_deg
        );
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_time::J2000_JD;

    #[test]
    fn kepler_circular_orbit() {
        assert!((solve_kepler(1.0, 0.0) - 1.0).abs() < 1e-14);
    }

    #[test]
    fn kepler_residual_small() {
        let (m, e) = (2.5, 0.2);
        let ea = solve_kepler(m, e);
        assert!((ea - e * ea.sin() - m).abs() < 1e-12);
    }

    #[test]
    fn sun_at_j2000() {
        // Apparent solar longitude at J2000.0 is ~280.37°; geometric mean ~280.46°.
        let p = KeplerianProvider
            .position(TimeValue::from_jd(J2000_JD), Body::Sun)
            .unwrap();
        assert!((p.longitude_deg - 280.4).abs() < 0.3, "sun = {}", p.longitude_deg);
        assert!((p.distance_au - 0.983).abs() < 0.01);
        assert!((p.speed_deg_per_day - 1.019).abs() < 0.01);
    }

    #[test]
    fn node_always_retrograde() {
        let p = KeplerianProvider
            .position(TimeValue::from_jd(2_460_000.5), Body::MeanNode)
            .unwrap();
        assert!(p.is_retrograde());
    }

    #[test]
    fn rejects_time_outside_range() {
        let err = KeplerianProvider
            .position(TimeValue::from_jd(1_000_000.0), Body::Sun)
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidTime { .. }));
        let err = KeplerianProvider
            .position(TimeValue::from_jd(f64::NAN), Body::Sun)
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidTime { .. }));
    }

    #[test]
    fn ascendant_leads_mc_at_equator() {
        // Sweep a day at the equator: the ascendant sits 90° ahead of the MC at
        // the moments the equinox culminates.
        let loc = GeoLocation::new(0.0, 0.0);
        for i in 0..24 {
            let t = TimeValue::from_jd(J2000_JD + i as f64 / 24.0);
            let h = KeplerianProvider.houses(t, &loc).unwrap();
            let d = angle_delta_deg(h.mc_deg, h.ascendant_deg);
            assert!(d > 60.0 && d < 120.0, "asc - mc = {d}");
        }
    }

    #[test]
    fn houses_reject_bad_location() {
        let err = KeplerianProvider
            .houses(TimeValue::from_jd(J2000_JD), &GeoLocation::new(100.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidLocation(_)));
    }
}
