//! Error types for the query engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced by [`crate::QueryEngine::compute`] and friends.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum QueryError {
    /// No body with the requested id exists in the container.
    UnknownBody(i32),
    /// The requested JD is outside `[start_jd, end_jd]` for this body.
    OutOfRange { body_id: i32, jd: f64 },
    /// The container itself reported an error while reading a block.
    ContainerError(String),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBody(id) => write!(f, "no body with id {id} in container"),
            Self::OutOfRange { body_id, jd } => {
                write!(f, "JD {jd} out of range for body {body_id}")
            }
            Self::ContainerError(msg) => write!(f, "container error: {msg}"),
        }
    }
}

impl Error for QueryError {}

impl From<eph_container::ContainerError> for QueryError {
    fn from(e: eph_container::ContainerError) -> Self {
        Self::ContainerError(e.to_string())
    }
}
