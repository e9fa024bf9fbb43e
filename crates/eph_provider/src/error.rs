//! Error type for planet-position providers.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced by a [`crate::PositionProvider`] implementation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProviderError {
    /// No body with this name is known to the provider.
    UnknownBody(String),
    /// The requested JD is outside the provider's supported range.
    OutOfRange { body: String, jd: f64 },
    /// The provider's backing query engine failed.
    QueryError(String),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBody(name) => write!(f, "provider has no body named {name}"),
            Self::OutOfRange { body, jd } => {
                write!(f, "JD {jd} out of range for body {body}")
            }
            Self::QueryError(msg) => write!(f, "provider query failed: {msg}"),
        }
    }
}

impl Error for ProviderError {}

impl From<eph_query::QueryError> for ProviderError {
    fn from(e: eph_query::QueryError) -> Self {
        Self::QueryError(e.to_string())
    }
}
