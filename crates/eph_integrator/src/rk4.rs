//! Classical fixed-step RK4 integration (§4.7 "Integration rule").
//!
//! At every sub-stage the acceleration function is re-evaluated at the
//! sub-stage time, which for the full dynamics means four planet-position
//! queries per sub-stage × eight planets = 32 provider calls per step.

use eph_provider::PositionProvider;

use crate::constants::SECONDS_PER_DAY;
use crate::dynamics::{State, total_acceleration};

fn add(a: State, b: State, scale: f64) -> State {
    State {
        position_m: [
            a.position_m[0] + b.position_m[0] * scale,
            a.position_m[1] + b.position_m[1] * scale,
            a.position_m[2] + b.position_m[2] * scale,
        ],
        velocity_m_s: [
            a.velocity_m_s[0] + b.velocity_m_s[0] * scale,
            a.velocity_m_s[1] + b.velocity_m_s[1] * scale,
            a.velocity_m_s[2] + b.velocity_m_s[2] * scale,
        ],
    }
}

fn combine(k1: State, k2: State, k3: State, k4: State) -> State {
    State {
        position_m: [
            (k1.position_m[0] + 2.0 * k2.position_m[0] + 2.0 * k3.position_m[0] + k4.position_m[0])
                / 6.0,
            (k1.position_m[1] + 2.0 * k2.position_m[1] + 2.0 * k3.position_m[1] + k4.position_m[1])
                / 6.0,
            (k1.position_m[2] + 2.0 * k2.position_m[2] + 2.0 * k3.position_m[2] + k4.position_m[2])
                / 6.0,
        ],
        velocity_m_s: [
            (k1.velocity_m_s[0] + 2.0 * k2.velocity_m_s[0] + 2.0 * k3.velocity_m_s[0] + k4.velocity_m_s[0])
                / 6.0,
            (k1.velocity_m_s[1] + 2.0 * k2.velocity_m_s[1] + 2.0 * k3.velocity_m_s[1] + k4.velocity_m_s[1])
                / 6.0,
            (k1.velocity_m_s[2] + 2.0 * k2.velocity_m_s[2] + 2.0 * k3.velocity_m_s[2] + k4.velocity_m_s[2])
                / 6.0,
        ],
    }
}

/// Advance `state` at `jd` by `step_days`, returning the new state and the
/// union of planet names degraded to zero across all four sub-stages.
pub fn rk4_step(
    state: State,
    jd: f64,
    step_days: f64,
    provider: &mut dyn PositionProvider,
    provider_is_precise: bool,
) -> (State, Vec<String>) {
    let h_s = step_days * SECONDS_PER_DAY;
    let half_step_days = step_days / 2.0;

    let mut degraded = Vec::new();
    let mut note = |mut names: Vec<String>| degraded.append(&mut names);

    let (k1, d1) = total_acceleration(state, jd, provider, provider_is_precise);
    note(d1);

    let mid_state = add(state, k1, h_s / 2.0);
    let (k2, d2) = total_acceleration(mid_state, jd + half_step_days, provider, provider_is_precise);
    note(d2);

    let mid_state2 = add(state, k2, h_s / 2.0);
    let (k3, d3) = total_acceleration(mid_state2, jd + half_step_days, provider, provider_is_precise);
    note(d3);

    let end_state = add(state, k3, h_s);
    let (k4, d4) = total_acceleration(end_state, jd + step_days, provider, provider_is_precise);
    note(d4);

    let delta = combine(k1, k2, k3, k4);
    let next = add(state, delta, h_s);

    degraded.sort();
    degraded.dedup();
    (next, degraded)
}
