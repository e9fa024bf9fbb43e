//! Integrator → container bridge (§4.8, C8): partitions the integrator's
//! dense sample stream into fixed-width intervals, fits each with C1,
//! validates the fit residual against a threshold, retrying at a halved
//! interval width up to twice, then hands the result to C3.

pub mod bridge;
pub mod error;
pub mod sample;
pub mod write;

pub use bridge::{BridgeConfig, BridgeReport, bridge_body};
pub use error::BridgeError;
pub use sample::{AU_M, DenseSample, from_output_samples};
pub use write::{BridgedBody, write_container};
