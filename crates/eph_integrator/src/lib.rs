//! RK4 N-body orbit integrator (§4.7, C7): solar gravity, eight-planet
//! perturbation sourced from a [`eph_provider::PositionProvider`], and the
//! Schwarzschild relativistic correction.

pub mod constants;
pub mod dynamics;
pub mod elements;
pub mod error;
pub mod propagate;
pub mod rk4;

pub use dynamics::State;
pub use elements::{CartesianState, KeplerianElements};
pub use error::IntegratorError;
pub use propagate::{IntegrationConfig, IntegrationReport, OutputSample, integrate};
