//! Chebyshev node generation.

use std::f64::consts::PI;

/// The `n` classical Chebyshev nodes (roots of `T_n`) on `[-1, 1]`.
///
/// `x_k = cos(pi*(2k+1) / (2n))` for `k = 0..n`. These are the roots, not
/// the extrema (Chebyshev–Gauss–Lobatto points); roots avoid sampling the
/// interval endpoints, which may coincide with source segment boundaries.
pub fn nodes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|k| (PI * (2 * k + 1) as f64 / (2 * n) as f64).cos())
        .collect()
}

/// Chebyshev nodes mapped from `[-1, 1]` into `[lo, hi]`.
pub fn nodes_mapped(n: usize, lo: f64, hi: f64) -> Vec<f64> {
    let mid = (lo + hi) / 2.0;
    let half = (hi - lo) / 2.0;
    nodes(n).into_iter().map(|x| mid + half * x).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_lie_in_range() {
        for &x in &nodes(8) {
            assert!(x > -1.0 && x < 1.0, "node {x} outside open interval");
        }
    }

    #[test]
    fn nodes_mapped_scales_correctly() {
        let mapped = nodes_mapped(8, 100.0, 116.0);
        for &x in &mapped {
            assert!(x > 100.0 && x < 116.0);
        }
    }

    #[test]
    fn single_node_is_centered() {
        let n = nodes_mapped(1, 10.0, 20.0);
        assert_eq!(n.len(), 1);
        assert!((n[0] - 15.0).abs() < 1e-12);
    }
}
