//! Error type for the orbit integrator.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced while propagating an orbit.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum IntegratorError {
    /// The per-step planet-position failure rate exceeded the configured
    /// threshold for too many consecutive steps.
    IntegratorDiverged { step: u64, degraded_fraction: f64 },
    /// A Kepler solve did not converge within the allotted iterations.
    KeplerSolveFailed { mean_anomaly_rad: f64, eccentricity: f64 },
    /// The requested output cadence does not evenly divide the propagation span.
    InvalidOutputStep { output_step_days: f64 },
}

impl Display for IntegratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntegratorDiverged { step, degraded_fraction } => write!(
                f,
                "integration diverged at step {step}: {:.1}% of perturbations degraded",
                degraded_fraction * 100.0
            ),
            Self::KeplerSolveFailed { mean_anomaly_rad, eccentricity } => write!(
                f,
                "Kepler solve did not converge for M={mean_anomaly_rad}, e={eccentricity}"
            ),
            Self::InvalidOutputStep { output_step_days } => {
                write!(f, "invalid output step: {output_step_days} days")
            }
        }
    }
}

impl Error for IntegratorError {}
