//! Equations of motion (§4.7): solar gravity, eight-planet perturbation
//! with mandatory indirect term, and the Schwarzschild first-post-Newtonian
//! correction.

use eph_provider::PositionProvider;

use crate::constants::{C_LIGHT, GM_SUN, PLANET_GM};

/// A heliocentric Cartesian state: position (m) and velocity (m/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position_m: [f64; 3],
    pub velocity_m_s: [f64; 3],
}

impl State {
    pub fn derivative(&self, acceleration_m_s2: [f64; 3]) -> State {
        State {
            position_m: self.velocity_m_s,
            velocity_m_s: acceleration_m_s2,
        }
    }
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn scale(v: [f64; 3], s: f64) -> [f64; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

fn add3(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Point-mass solar gravity: `a_sun = -GM_sun * r / |r|^3`.
pub fn solar_gravity(r: [f64; 3]) -> [f64; 3] {
    let dist = norm(r);
    scale(r, -GM_SUN / dist.powi(3))
}

/// First-post-Newtonian Schwarzschild correction.
pub fn relativistic_correction(r: [f64; 3], v: [f64; 3]) -> [f64; 3] {
    let dist = norm(r);
    let v2 = dot(v, v);
    let r_dot_v = dot(r, v);
    let coefficient = GM_SUN / (dist.powi(3) * C_LIGHT * C_LIGHT);
    let term_r = scale(r, 4.0 * GM_SUN / dist - v2);
    let term_v = scale(v, 4.0 * r_dot_v);
    scale(add3(term_r, term_v), coefficient)
}

/// Outcome of one perturbation evaluation: the summed acceleration plus the
/// set of planet names whose query failed and were degraded to zero,
/// per §4.7's failure model.
pub struct PerturbationResult {
    pub acceleration_m_s2: [f64; 3],
    pub degraded_bodies: Vec<String>,
}

/// Sum the eight-planet N-body perturbation, including the mandatory
/// indirect term. A provider failure for any single planet degrades that
/// planet's contribution to zero rather than aborting the whole step.
///
/// `sun_offset_m` is the Sun's position in the provider's own frame: a
/// container-backed (barycentric) provider returns planet positions
/// relative to the solar-system barycenter, so this must be subtracted to
/// recover the heliocentric `r_i` the equations of motion are written in.
/// A provider with no independent Sun entry (the simplified Keplerian or
/// null providers) passes `[0.0; 3]`, since its positions are already
/// heliocentric.
pub fn nbody_perturbation(
    r: [f64; 3],
    jd: f64,
    provider: &mut dyn PositionProvider,
    sun_offset_m: [f64; 3],
) -> PerturbationResult {
    let mut acceleration = [0.0, 0.0, 0.0];
    let mut degraded_bodies = Vec::new();

    for (name, gm) in PLANET_GM {
        match provider.position(name, jd) {
            Ok(r_planet_raw) => {
                let r_planet = sub(r_planet_raw, sun_offset_m);
                let diff = sub(r_planet, r);
                let diff_dist = norm(diff);
                let planet_dist = norm(r_planet);
                let direct = scale(diff, gm / diff_dist.powi(3));
                let indirect = scale(r_planet, gm / planet_dist.powi(3));
                acceleration = add3(acceleration, sub(direct, indirect));
            }
            Err(_) => {
                degraded_bodies.push(name.to_string());
            }
        }
    }

    PerturbationResult {
        acceleration_m_s2: acceleration,
        degraded_bodies,
    }
}

/// Total acceleration: solar gravity + N-body perturbation + relativistic
/// correction (§4.7, all three terms).
///
/// `provider_is_precise` selects whether the Sun's own position is queried
/// and subtracted from each planet query (see [`nbody_perturbation`]).
pub fn total_acceleration(
    state: State,
    jd: f64,
    provider: &mut dyn PositionProvider,
    provider_is_precise: bool,
) -> (State, Vec<String>) {
    let sun_offset_m = if provider_is_precise {
        match provider.position("Sun", jd) {
            Ok(offset) => offset,
            Err(_) => {
                // A precise (barycentric) provider with no Sun position has
                // no way to recover heliocentric planet positions this step;
                // rather than fake a zero offset and silently miscompute the
                // perturbation term, skip it and mark the step degraded.
                let a_sun = solar_gravity(state.position_m);
                let a_rel = relativistic_correction(state.position_m, state.velocity_m_s);
                let total = add3(a_sun, a_rel);
                return (state.derivative(total), vec!["Sun".to_string()]);
            }
        }
    } else {
        [0.0, 0.0, 0.0]
    };

    let a_sun = solar_gravity(state.position_m);
    let perturbation = nbody_perturbation(state.position_m, jd, provider, sun_offset_m);
    let a_rel = relativistic_correction(state.position_m, state.velocity_m_s);

    let total = add3(add3(a_sun, perturbation.acceleration_m_s2), a_rel);
    (state.derivative(total), perturbation.degraded_bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eph_provider::NullProvider;

    #[test]
    fn solar_gravity_points_toward_origin() {
        let a = solar_gravity([1.496e11, 0.0, 0.0]);
        assert!(a[0] < 0.0);
        assert_eq!(a[1], 0.0);
        assert_eq!(a[2], 0.0);
    }

    #[test]
    fn relativistic_correction_is_tiny_at_one_au() {
        let r = [1.496e11, 0.0, 0.0];
        let v = [0.0, 29_780.0, 0.0];
        let a_rel = relativistic_correction(r, v);
        let a_sun = solar_gravity(r);
        assert!(norm(a_rel) / norm(a_sun) < 1e-6);
    }

    #[test]
    fn nbody_perturbation_degrades_on_unknown_body() {
        let mut provider = NullProvider::new([5.0 * 1.496e11, 0.0, 0.0]);
        // NullProvider never errors, so nothing should degrade.
        let result = nbody_perturbation(
            [1.496e11, 0.0, 0.0],
            2_451_545.0,
            &mut provider,
            [0.0, 0.0, 0.0],
        );
        assert!(result.degraded_bodies.is_empty());
    }
}
