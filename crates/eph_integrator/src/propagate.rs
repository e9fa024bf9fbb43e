//! Propagation to the requested start epoch, dense RK4 stepping, and output
//! sampling (§4.7 "Propagation to start", "Output", "Failure model").

use std::collections::VecDeque;

use eph_provider::PositionProvider;

use crate::constants::GM_SUN;
use crate::dynamics::State;
use crate::elements::KeplerianElements;
use crate::error::IntegratorError;
use crate::rk4::rk4_step;

/// Width of the sliding window used to judge a "persistent" per-step
/// failure rate (§4.7 "Failure model").
const FAILURE_WINDOW: usize = 20;

/// One output sample: heliocentric position at a requested JD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputSample {
    pub jd: f64,
    pub position_m: [f64; 3],
}

/// Summary of a completed (or aborted) integration run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrationReport {
    pub steps_taken: u64,
    pub degraded_steps: u64,
    pub degraded_bodies: Vec<String>,
}

/// Full configuration for one integration run.
pub struct IntegrationConfig {
    pub elements: KeplerianElements,
    /// Epoch to begin emitting output samples from, Julian Date (TDB).
    pub start_jd: f64,
    /// Total propagation span past `start_jd`, in days.
    pub duration_days: f64,
    /// RK4 step size, days.
    pub step_days: f64,
    /// Cadence at which output samples are emitted; must be an integer
    /// multiple of `step_days`.
    pub output_step_days: f64,
    /// Whether the provider returns barycentric positions (a container-
    /// backed provider) and therefore needs the Sun's own position
    /// subtracted per query (see [`crate::dynamics::nbody_perturbation`]).
    pub provider_is_precise: bool,
    /// Abort the run if the fraction of degraded steps in the trailing
    /// [`FAILURE_WINDOW`] exceeds this value.
    pub max_degraded_fraction: f64,
}

fn propagate_to_start(
    mut state: State,
    mut current_jd: f64,
    start_jd: f64,
    provider: &mut dyn PositionProvider,
    provider_is_precise: bool,
) -> (State, f64) {
    let gap = start_jd - current_jd;
    if gap == 0.0 {
        return (state, current_jd);
    }

    let direction = gap.signum();
    let coarse_magnitude = if gap.abs() < 100.0 { 1.0 } else { 5.0 };
    let coarse_step = direction * coarse_magnitude;

    let mut remaining = gap;
    while remaining.abs() > coarse_magnitude {
        let (next, _degraded) =
            rk4_step(state, current_jd, coarse_step, provider, provider_is_precise);
        state = next;
        current_jd += coarse_step;
        remaining -= coarse_step;
    }

    if remaining.abs() > 1e-12 {
        let (next, _degraded) =
            rk4_step(state, current_jd, remaining, provider, provider_is_precise);
        state = next;
        current_jd = start_jd;
    }

    (state, current_jd)
}

/// Run the full integration: propagate to `config.start_jd` if needed, then
/// step at `config.step_days` for `config.duration_days`, emitting a sample
/// every `config.output_step_days`.
pub fn integrate(
    config: &IntegrationConfig,
    provider: &mut dyn PositionProvider,
) -> Result<(Vec<OutputSample>, IntegrationReport), IntegratorError> {
    let steps_per_output = (config.output_step_days / config.step_days).round();
    if (steps_per_output * config.step_days - config.output_step_days).abs() > 1e-6 {
        return Err(IntegratorError::InvalidOutputStep {
            output_step_days: config.output_step_days,
        });
    }
    let steps_per_output = steps_per_output as u64;

    let initial = config.elements.to_heliocentric_cartesian(GM_SUN)?;
    let state = State {
        position_m: initial.position_m,
        velocity_m_s: initial.velocity_m_s,
    };
    let (mut state, mut current_jd) = propagate_to_start(
        state,
        config.elements.epoch_jd,
        config.start_jd,
        provider,
        config.provider_is_precise,
    );

    let total_steps = (config.duration_days / config.step_days).round() as u64;

    let mut samples = vec![OutputSample {
        jd: current_jd,
        position_m: state.position_m,
    }];
    let mut report = IntegrationReport::default();
    let mut failure_window: VecDeque<bool> = VecDeque::with_capacity(FAILURE_WINDOW);

    for step_idx in 1..=total_steps {
        let (next, degraded) = rk4_step(
            state,
            current_jd,
            config.step_days,
            provider,
            config.provider_is_precise,
        );
        state = next;
        current_jd += config.step_days;
        report.steps_taken += 1;

        let step_degraded = !degraded.is_empty();
        if step_degraded {
            report.degraded_steps += 1;
            for name in degraded {
                if !report.degraded_bodies.contains(&name) {
                    report.degraded_bodies.push(name);
                }
            }
        }

        failure_window.push_back(step_degraded);
        if failure_window.len() > FAILURE_WINDOW {
            failure_window.pop_front();
        }
        if failure_window.len() == FAILURE_WINDOW {
            let degraded_fraction =
                failure_window.iter().filter(|&&d| d).count() as f64 / FAILURE_WINDOW as f64;
            if degraded_fraction > config.max_degraded_fraction {
                return Err(IntegratorError::IntegratorDiverged {
                    step: step_idx,
                    degraded_fraction,
                });
            }
        }

        if step_idx % steps_per_output == 0 {
            samples.push(OutputSample {
                jd: current_jd,
                position_m: state.position_m,
            });
        }
    }

    Ok((samples, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::KeplerianElements;
    use eph_provider::NullProvider;
    use std::f64::consts::TAU;

    fn circular_elements() -> KeplerianElements {
        KeplerianElements {
            epoch_jd: 2_451_545.0,
            semi_major_axis_m: 1.495_978_707e11,
            eccentricity: 0.0,
            inclination_rad: 0.0,
            arg_periapsis_rad: 0.0,
            raan_rad: 0.0,
            mean_anomaly_rad: 0.0,
        }
    }

    #[test]
    fn circular_orbit_closes_after_one_period() {
        // §8.4 scenario 4: circular heliocentric elements with Sun-only
        // gravity, integrated one sidereal year at h = 0.25 days.
        let config = IntegrationConfig {
            elements: circular_elements(),
            start_jd: 2_451_545.0,
            duration_days: 365.25,
            step_days: 0.25,
            output_step_days: 365.25,
            provider_is_precise: false,
            max_degraded_fraction: 1.0,
        };
        // A planet far enough away that the perturbation/indirect terms
        // stay negligible relative to solar gravity over one year.
        let mut provider = NullProvider::new([50.0 * 1.495_978_707e11, 0.0, 0.0]);
        let (samples, report) = integrate(&config, &mut provider).unwrap();

        assert_eq!(report.steps_taken, (365.25 / 0.25).round() as u64);
        let start = samples[0];
        let end = samples[samples.len() - 1];

        let r0 = (start.position_m[0].powi(2) + start.position_m[1].powi(2)).sqrt();
        let r1 = (end.position_m[0].powi(2) + end.position_m[1].powi(2)).sqrt();
        assert!((r1 - r0).abs() / r0 < 1e-3);

        let theta0 = start.position_m[1].atan2(start.position_m[0]);
        let theta1 = end.position_m[1].atan2(end.position_m[0]);
        let mut delta_theta = theta1 - theta0;
        while delta_theta < 0.0 {
            delta_theta += TAU;
        }
        assert!((delta_theta - TAU).abs() < 1e-2 || delta_theta.abs() < 1e-2);
    }

    #[test]
    fn mismatched_output_step_is_rejected() {
        let config = IntegrationConfig {
            elements: circular_elements(),
            start_jd: 2_451_545.0,
            duration_days: 10.0,
            step_days: 0.3,
            output_step_days: 1.0,
            provider_is_precise: false,
            max_degraded_fraction: 1.0,
        };
        let mut provider = NullProvider::new([50.0 * 1.495_978_707e11, 0.0, 0.0]);
        assert!(matches!(
            integrate(&config, &mut provider),
            Err(IntegratorError::InvalidOutputStep { .. })
        ));
    }

    #[test]
    fn propagation_to_start_advances_from_earlier_epoch() {
        let mut elements = circular_elements();
        elements.epoch_jd = 2_451_545.0 - 10.0;
        let config = IntegrationConfig {
            elements,
            start_jd: 2_451_545.0,
            duration_days: 1.0,
            step_days: 0.25,
            output_step_days: 1.0,
            provider_is_precise: false,
            max_degraded_fraction: 1.0,
        };
        let mut provider = NullProvider::new([50.0 * 1.495_978_707e11, 0.0, 0.0]);
        let (samples, _report) = integrate(&config, &mut provider).unwrap();
        assert_eq!(samples[0].jd, 2_451_545.0);
    }
}
