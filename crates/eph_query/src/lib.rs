//! Query engine for the `.eph` container (§4.5, C5): interval lookup by
//! binary search, time normalization into `[-1, 1]`, and Chebyshev
//! evaluation, with an optional bounded coefficient-block cache.

pub mod cache;
pub mod engine;
pub mod error;

pub use engine::{QueryEngine, StateVector, find_interval, normalize_time};
pub use error::QueryError;
