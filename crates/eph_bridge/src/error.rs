//! Error type for the integrator → container bridge.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced while bridging integrator output into a `.eph` container.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BridgeError {
    /// No dense samples fall within a partitioned span.
    EmptySpan { start_jd: f64, end_jd: f64 },
    /// The container layer rejected the assembled body/interval data.
    ContainerError(String),
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySpan { start_jd, end_jd } => {
                write!(f, "no samples in span [{start_jd}, {end_jd}]")
            }
            Self::ContainerError(msg) => write!(f, "container error: {msg}"),
        }
    }
}

impl Error for BridgeError {}

impl From<eph_container::ContainerError> for BridgeError {
    fn from(e: eph_container::ContainerError) -> Self {
        Self::ContainerError(e.to_string())
    }
}
