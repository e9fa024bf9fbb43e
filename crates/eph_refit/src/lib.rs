//! Refit pipeline (C4): drives a source `sample_position`-like callable
//! through Chebyshev-node sampling and fitting, producing the inputs
//! [`eph_container::encode`] needs to write a `.eph` file.

pub mod error;
pub mod intervals;
pub mod pipeline;

pub use error::RefitError;
pub use intervals::build_intervals;
pub use pipeline::{KM_PER_AU, RefitBody, RefitConfig, RefitReport, run_refit};
