//! Osculating Keplerian elements → heliocentric Cartesian state (§4.7
//! "Initial state"): Newton-Raphson Kepler solve, then the classical
//! perifocal → reference-frame 3-1-3 rotation (argument of periapsis,
//! inclination, longitude of ascending node).

use crate::error::IntegratorError;

const MAX_KEPLER_ITERATIONS: u32 = 10;
const KEPLER_CONVERGENCE: f64 = 1e-12;

/// Osculating Keplerian elements at a given epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerianElements {
    /// Epoch of the elements, Julian Date (TDB).
    pub epoch_jd: f64,
    /// Semi-major axis, meters.
    pub semi_major_axis_m: f64,
    /// Eccentricity, dimensionless.
    pub eccentricity: f64,
    /// Inclination, radians.
    pub inclination_rad: f64,
    /// Argument of periapsis, radians.
    pub arg_periapsis_rad: f64,
    /// Longitude of ascending node, radians.
    pub raan_rad: f64,
    /// Mean anomaly at `epoch_jd`, radians.
    pub mean_anomaly_rad: f64,
}

/// A Cartesian position/velocity pair, meters and meters/second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianState {
    pub position_m: [f64; 3],
    pub velocity_m_s: [f64; 3],
}

fn solve_kepler(mean_anomaly_rad: f64, eccentricity: f64) -> Result<f64, IntegratorError> {
    let mut e = mean_anomaly_rad;
    for _ in 0..MAX_KEPLER_ITERATIONS {
        let delta =
            (e - eccentricity * e.sin() - mean_anomaly_rad) / (1.0 - eccentricity * e.cos());
        e -= delta;
        if delta.abs() < KEPLER_CONVERGENCE {
            return Ok(e);
        }
    }
    Err(IntegratorError::KeplerSolveFailed {
        mean_anomaly_rad,
        eccentricity,
    })
}

impl KeplerianElements {
    /// Convert to a heliocentric Cartesian state via Kepler solve + 3-1-3
    /// rotation. `gm_central` is the central body's gravitational
    /// parameter (m³/s²), used both for the perifocal velocity and the
    /// mean-motion-derived rotation.
    pub fn to_heliocentric_cartesian(
        &self,
        gm_central: f64,
    ) -> Result<CartesianState, IntegratorError> {
        let a = self.semi_major_axis_m;
        let e = self.eccentricity;
        let eccentric_anomaly = solve_kepler(self.mean_anomaly_rad, e)?;

        let cos_e = eccentric_anomaly.cos();
        let sin_e = eccentric_anomaly.sin();
        let one_minus_e_cos_e = 1.0 - e * cos_e;
        let sqrt_one_minus_e2 = (1.0 - e * e).sqrt();

        // Perifocal frame position and velocity.
        let r_pf = [a * (cos_e - e), a * sqrt_one_minus_e2 * sin_e, 0.0];
        let n = (gm_central / a.powi(3)).sqrt();
        let v_pf = [
            -a * n * sin_e / one_minus_e_cos_e,
            a * n * sqrt_one_minus_e2 * cos_e / one_minus_e_cos_e,
            0.0,
        ];

        let position_m = rotate_perifocal_to_reference(
            r_pf,
            self.arg_periapsis_rad,
            self.inclination_rad,
            self.raan_rad,
        );
        let velocity_m_s = rotate_perifocal_to_reference(
            v_pf,
            self.arg_periapsis_rad,
            self.inclination_rad,
            self.raan_rad,
        );

        Ok(CartesianState {
            position_m,
            velocity_m_s,
        })
    }
}

/// Rotate a perifocal-frame vector into the reference frame: rotate by
/// argument of periapsis about Z, then by inclination about X, then by
/// longitude of ascending node about Z (the 3-1-3 Euler sequence).
fn rotate_perifocal_to_reference(v: [f64; 3], arg_peri: f64, incl: f64, raan: f64) -> [f64; 3] {
    let (x0, y0, _z0) = (v[0], v[1], v[2]);

    // Rotate about Z by argument of periapsis.
    let x1 = arg_peri.cos() * x0 - arg_peri.sin() * y0;
    let y1 = arg_peri.sin() * x0 + arg_peri.cos() * y0;

    // Rotate about X by inclination.
    let y2 = incl.cos() * y1;
    let z2 = incl.sin() * y1;
    let x2 = x1;

    // Rotate about Z by longitude of ascending node.
    let x3 = raan.cos() * x2 - raan.sin() * y2;
    let y3 = raan.sin() * x2 + raan.cos() * y2;

    [x3, y3, z2]
}
