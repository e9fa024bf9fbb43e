//! Simplified Keplerian provider (§4.6): closed-form Kepler solve against
//! hard-coded mean orbital elements, accurate to roughly 10³–10⁴ km — good
//! enough to source an N-body perturbation term.
//!
//! Elements are the JPL low-precision planetary mean elements (Standish
//! 1992, valid 3000 BC–3000 AD), linear in Julian centuries past J2000.

use eph_time::julian::J2000_JD;

use crate::error::ProviderError;
use crate::provider::PositionProvider;

const METERS_PER_AU: f64 = 149_597_870_700.0;
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
const JULIAN_CENTURY_DAYS: f64 = 36_525.0;
const MAX_KEPLER_ITERATIONS: u32 = 10;
const KEPLER_CONVERGENCE: f64 = 1e-12;

/// Mean orbital elements at J2000 and their rate per Julian century.
/// `a` in AU; `e` dimensionless; `i`, `l`, `long_peri`, `long_node` in degrees.
#[derive(Debug, Clone, Copy)]
struct MeanElements {
    a0: f64,
    a_dot: f64,
    e0: f64,
    e_dot: f64,
    i0: f64,
    i_dot: f64,
    l0: f64,
    l_dot: f64,
    long_peri0: f64,
    long_peri_dot: f64,
    long_node0: f64,
    long_node_dot: f64,
}

/// Mercury through Neptune, in that order, matching §4.7's eight-planet
/// perturbation set.
const PLANETS: [(&str, MeanElements); 8] = [
    (
        "Mercury",
        MeanElements {
            a0: 0.387_098_43,
            a_dot: 0.000_000_00,
            e0: 0.205_636_61,
            e_dot: 0.000_021_23,
            i0: 7.005_594_32,
            i_dot: -0.005_901_58,
            l0: 252.251_667_24,
            l_dot: 149_472.674_866_23,
            long_peri0: 77.457_718_95,
            long_peri_dot: 0.159_400_13,
            long_node0: 48.339_618_19,
            long_node_dot: -0.122_141_82,
        },
    ),
    (
        "Venus",
        MeanElements {
            a0: 0.723_321_02,
            a_dot: -0.000_000_26,
            e0: 0.006_763_99,
            e_dot: -0.000_051_07,
            i0: 3.397_775_45,
            i_dot: 0.000_434_94,
            l0: 181.979_708_50,
            l_dot: 58_517.815_602_60,
            long_peri0: 131.767_557_13,
            long_peri_dot: 0.056_796_48,
            long_node0: 76.672_614_96,
            long_node_dot: -0.272_741_74,
        },
    ),
    (
        "Earth",
        MeanElements {
            a0: 1.000_000_18,
            a_dot: -0.000_000_03,
            e0: 0.016_731_63,
            e_dot: -0.000_036_61,
            i0: -0.000_543_46,
            i_dot: -0.013_371_78,
            l0: 100.466_915_72,
            l_dot: 35_999.373_063_29,
            long_peri0: 102.930_058_85,
            long_peri_dot: 0.317_952_60,
            long_node0: -5.112_603_89,
            long_node_dot: -0.241_238_56,
        },
    ),
    (
        "Mars",
        MeanElements {
            a0: 1.523_712_43,
            a_dot: 0.000_000_97,
            e0: 0.093_365_11,
            e_dot: 0.000_091_49,
            i0: 1.851_818_69,
            i_dot: -0.007_247_57,
            l0: -4.568_131_64,
            l_dot: 19_140.299_342_43,
            long_peri0: -23.917_447_84,
            long_peri_dot: 0.452_236_25,
            long_node0: 49.713_209_84,
            long_node_dot: -0.268_524_31,
        },
    ),
    (
        "Jupiter",
        MeanElements {
            a0: 5.202_480_19,
            a_dot: -0.000_028_64,
            e0: 0.048_535_90,
            e_dot: 0.000_180_26,
            i0: 1.298_614_16,
            i_dot: -0.003_226_99,
            l0: 34.334_791_52,
            l_dot: 3_034.903_717_57,
            long_peri0: 14.274_952_44,
            long_peri_dot: 0.181_991_96,
            long_node0: 100.292_826_54,
            long_node_dot: 0.130_246_19,
        },
    ),
    (
        "Saturn",
        MeanElements {
            a0: 9.541_498_83,
            a_dot: -0.000_030_65,
            e0: 0.055_508_25,
            e_dot: -0.000_320_44,
            i0: 2.494_241_02,
            i_dot: 0.004_519_69,
            l0: 50.075_713_29,
            l_dot: 1_222.114_947_24,
            long_peri0: 92.861_360_63,
            long_peri_dot: 0.541_794_78,
            long_node0: 113.639_987_02,
            long_node_dot: -0.250_150_02,
        },
    ),
    (
        "Uranus",
        MeanElements {
            a0: 19.187_979_48,
            a_dot: -0.000_204_55,
            e0: 0.046_857_40,
            e_dot: -0.000_015_50,
            i0: 0.772_981_27,
            i_dot: -0.001_801_55,
            l0: 314.202_766_25,
            l_dot: 428.495_125_95,
            long_peri0: 172.434_044_41,
            long_peri_dot: 0.092_669_85,
            long_node0: 73.962_502_15,
            long_node_dot: 0.057_396_99,
        },
    ),
    (
        "Neptune",
        MeanElements {
            a0: 30.069_527_52,
            a_dot: 0.000_064_47,
            e0: 0.008_954_39,
            e_dot: 0.000_008_18,
            i0: 1.770_055_20,
            i_dot: 0.000_224_00,
            l0: 304.222_892_87,
            l_dot: 218.465_153_14,
            long_peri0: 46.681_587_24,
            long_peri_dot: 0.010_099_38,
            long_node0: 131.786_358_53,
            long_node_dot: -0.006_063_02,
        },
    ),
];

fn elements_for(body_name: &str) -> Option<&'static MeanElements> {
    PLANETS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(body_name))
        .map(|(_, e)| e)
}

fn solve_kepler(mean_anomaly_rad: f64, eccentricity: f64) -> f64 {
    let mut e = mean_anomaly_rad;
    for _ in 0..MAX_KEPLER_ITERATIONS {
        let delta = (e - eccentricity * e.sin() - mean_anomaly_rad) / (1.0 - eccentricity * e.cos());
        e -= delta;
        if delta.abs() < KEPLER_CONVERGENCE {
            break;
        }
    }
    e
}

/// Heliocentric ecliptic position (AU) from mean elements at Julian century
/// `t` past J2000, via Newton-Raphson Kepler solve and the 3-1-3
/// argument-of-periapsis / inclination / ascending-node rotation.
fn heliocentric_position_au(elements: &MeanElements, centuries: f64) -> [f64; 3] {
    let a = elements.a0 + elements.a_dot * centuries;
    let e = elements.e0 + elements.e_dot * centuries;
    let i = (elements.i0 + elements.i_dot * centuries) * DEG_TO_RAD;
    let l = (elements.l0 + elements.l_dot * centuries) * DEG_TO_RAD;
    let long_peri = (elements.long_peri0 + elements.long_peri_dot * centuries) * DEG_TO_RAD;
    let long_node = (elements.long_node0 + elements.long_node_dot * centuries) * DEG_TO_RAD;

    let mean_anomaly = l - long_peri;
    let arg_peri = long_peri - long_node;

    let eccentric_anomaly = solve_kepler(mean_anomaly, e);

    let p = a * (eccentric_anomaly.cos() - e);
    let q = a * eccentric_anomaly.sin() * (1.0 - e * e).sqrt();

    // rotate by argument of periapsis
    let x1 = arg_peri.cos() * p - arg_peri.sin() * q;
    let y1 = arg_peri.sin() * p + arg_peri.cos() * q;
    // rotate by inclination
    let z2 = i.sin() * x1;
    let x2 = i.cos() * x1;
    let y2 = y1;
    // rotate by longitude of ascending node
    let x3 = long_node.cos() * x2 - long_node.sin() * y2;
    let y3 = long_node.sin() * x2 + long_node.cos() * y2;

    [x3, y3, z2]
}

/// A [`PositionProvider`] backed by closed-form Keplerian mean elements.
///
/// Returns heliocentric position (no Sun-SSB lift is available without a
/// precise source, per §4.7 "Initial state").
#[derive(Debug, Default, Clone, Copy)]
pub struct KeplerianProvider;

impl PositionProvider for KeplerianProvider {
    fn position(&mut self, body_name: &str, jd: f64) -> Result<[f64; 3], ProviderError> {
        let elements =
            elements_for(body_name).ok_or_else(|| ProviderError::UnknownBody(body_name.to_string()))?;
        let centuries = (jd - J2000_JD) / JULIAN_CENTURY_DAYS;
        let au = heliocentric_position_au(elements, centuries);
        Ok([
            au[0] * METERS_PER_AU,
            au[1] * METERS_PER_AU,
            au[2] * METERS_PER_AU,
        ])
    }
}
