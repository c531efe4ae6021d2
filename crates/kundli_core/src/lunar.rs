//! Truncated lunar theory and the mean lunar node.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47. Only the
//! largest periodic terms are kept (longitude error well under 0.3°).
//! Angles are referred to the mean equinox of date.

use crate::types::normalize_deg;

/// Astronomical unit in km.
pub(crate) const AU_KM: f64 = 149_597_870.7;

/// Mean Earth–Moon distance in AU, reported for the node.
pub(crate) const MEAN_MOON_DISTANCE_AU: f64 = 384_400.0 / AU_KM;

/// (D, M, M', F multipliers, coefficient in degrees) for Σl.
const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 14] = [
    (0, 0, 1, 0, 6.288_774),
    (2, 0, -1, 0, 1.274_027),
    (2, 0, 0, 0, 0.658_314),
    (0, 0, 2, 0, 0.213_618),
    (0, 1, 0, 0, -0.185_116),
    (0, 0, 0, 2, -0.114_332),
    (2, 0, -2, 0, 0.058_793),
    (2, -1, -1, 0, 0.057_066),
    (2, 0, 1, 0, 0.053_322),
    (2, -1, 0, 0, 0.045_758),
    (0, 1, -1, 0, -0.040_923),
    (1, 0, 0, 0, -0.034_720),
    (0, 1, 1, 0, -0.030_383),
    (2, 0, 0, -2, 0.015_327),
];

/// Σb terms, degrees.
const LATITUDE_TERMS: [(i8, i8, i8, i8, f64); 6] = [
    (0, 0, 0, 1, 5.128_122),
    (0, 0, 1, 1, 0.280_602),
    (0, 0, 1, -1, 0.277_693),
    (2, 0, 0, -1, 0.173_237),
    (2, 0, -1, 1, 0.055_413),
    (2, 0, -1, -1, 0.046_271),
];

/// Σr terms, km.
const DISTANCE_TERMS: [(i8, i8, i8, i8, f64); 5] = [
    (0, 0, 1, 0, -20_905.355),
    (2, 0, -1, 0, -3_699.111),
    (2, 0, 0, 0, -2_955.968),
    (0, 0, 2, 0, -569.925),
    (0, 1, 0, 0, 48.888),
];

struct Arguments {
    mean_longitude: f64,
    d: f64,
    m: f64,
    m_prime: f64,
    f: f64,
    /// Eccentricity factor for terms containing M.
    e: f64,
}

fn arguments(t: f64) -> Arguments {
    let t2 = t * t;
    let t3 = t2 * t;
    Arguments {
        mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
            + t3 / 538_841.0,
        d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0,
        m: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2,
        m_prime: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0,
        f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2,
        e: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
    }
}

fn series(
    args: &Arguments,
    terms: &[(i8, i8, i8, i8, f64)],
    trig: fn(f64) -> f64,
) -> f64 {
    terms
        .iter()
        .map(|&(d, m, mp, f, coeff)| {
            let arg = d as f64 * args.d
                + m as f64 * args.m
                + mp as f64 * args.m_prime
                + f as f64 * args.f;
            let e_factor = args.e.powi(m.unsigned_abs() as i32);
            coeff * e_factor * trig(arg.to_radians())
        })
        .sum()
}

/// Geocentric Moon: (longitude deg [0, 360), latitude deg, distance AU).
///
/// `t` = Julian centuries since J2000.0.
pub(crate) fn moon_position(t: f64) -> (f64, f64, f64) {
    let args = arguments(t);
    let lon = normalize_deg(args.mean_longitude + series(&args, &LONGITUDE_TERMS, f64::sin));
    let lat = series(&args, &LATITUDE_TERMS, f64::sin);
    let dist_km = 385_000.56 + series(&args, &DISTANCE_TERMS, f64::cos);
    (lon, lat, dist_km / AU_KM)
}

/// Mean longitude of the Moon's ascending node, degrees [0, 360).
pub(crate) fn mean_node_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_deg(
        125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
            - t4 / 60_616_000.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-Apr-12 0h TD, JD 2448724.5: λ = 133.162655°, β = -3.229126°, Δ = 368409.7 km
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let (lon, lat, dist) = moon_position(t);
        assert!((lon - 133.162_655).abs() < 0.3, "lon = {lon}");
        assert!((lat - (-3.229_126)).abs() < 0.2, "lat = {lat}");
        assert!((dist * AU_KM - 368_409.7).abs() < 2_000.0, "dist = {}", dist * AU_KM);
    }

    #[test]
    fn mean_node_at_j2000() {
        assert!((mean_node_deg(0.0) - 125.044_547_9).abs() < 1e-9);
    }

    #[test]
    fn mean_node_regresses() {
        let a = mean_node_deg(0.0);
        let b = mean_node_deg(1.0 / 36_525.0);
        let delta = normalize_deg(b - a + 180.0) - 180.0;
        assert!((delta + 0.052_954).abs() < 1e-4, "delta = {delta}");
    }
}
