//! Error types for the refit pipeline.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced while driving a refit run.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RefitError {
    /// `interval_days` is not positive, or `end_jd <= start_jd`.
    InvalidSpan { start_jd: f64, end_jd: f64, interval_days: f64 },
    /// Writing the resulting container failed.
    ContainerError(String),
}

impl Display for RefitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSpan {
                start_jd,
                end_jd,
                interval_days,
            } => write!(
                f,
                "invalid refit span: start_jd={start_jd} end_jd={end_jd} interval_days={interval_days}"
            ),
            Self::ContainerError(msg) => write!(f, "container error: {msg}"),
        }
    }
}

impl Error for RefitError {}

impl From<eph_container::ContainerError> for RefitError {
    fn from(e: eph_container::ContainerError) -> Self {
        Self::ContainerError(e.to_string())
    }
}
