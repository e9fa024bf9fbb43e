//! Chebyshev polynomial fitting and evaluation.
//!
//! This crate is the numerical core shared by the DAF/SPK reader, the
//! refit pipeline, and the query engine:
//!
//! 1. [`nodes`] — Chebyshev node generation on `[-1, 1]`, or mapped into an
//!    arbitrary interval.
//! 2. [`fit`] — coefficient fitting from sampled values, either at the
//!    canonical node set (closed form) or via oversampled least squares.
//! 3. [`eval`] — Clenshaw-recurrence evaluation of a series, its
//!    derivative, or both in one pass.
//!
//! The evaluation kernel is reentrant, allocation-free, and does not
//! validate its domain: callers passing `|x| > 1` get whatever the
//! recurrence computes, per the contract in the container format's query
//! path (out-of-domain inputs are rejected one layer up, at interval
//! lookup).

pub mod eval;
pub mod fit;
pub mod nodes;

pub use eval::{derivative_coeffs, evaluate, evaluate_both, evaluate_derivative};
pub use fit::{fit_at_nodes, fit_least_squares};
pub use nodes::{nodes, nodes_mapped};
