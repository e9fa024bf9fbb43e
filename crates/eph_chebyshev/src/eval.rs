//! Clenshaw-recurrence evaluation of a truncated Chebyshev series.

/// Evaluate `sum_k c_k * T_k(x)` via Clenshaw's recurrence.
///
/// An empty coefficient slice evaluates to `0.0`. The kernel performs no
/// allocation and does not validate that `x` lies in `[-1, 1]`; that is the
/// caller's responsibility.
pub fn evaluate(coeffs: &[f64], x: f64) -> f64 {
    let n = coeffs.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return coeffs[0];
    }

    let mut b_k1 = 0.0_f64; // b_{k+1}
    let mut b_k2 = 0.0_f64; // b_{k+2}

    for &c_k in coeffs[1..].iter().rev() {
        let b_k = 2.0 * x * b_k1 - b_k2 + c_k;
        b_k2 = b_k1;
        b_k1 = b_k;
    }

    coeffs[0] + x * b_k1 - b_k2
}

/// Coefficients of the derivative (with respect to `x`) of a Chebyshev
/// series, via the standard recurrence
/// `c'_k = c'_{k+2} + 2*(k+1)*c_{k+1}`, computed from the top down.
///
/// The returned vector has one fewer term than `coeffs` (or is empty if
/// `coeffs` has at most one term). The result is still in `x`-units; scale
/// by `2 / (interval width)` to convert back to per-day derivatives.
pub fn derivative_coeffs(coeffs: &[f64]) -> Vec<f64> {
    let n = coeffs.len();
    if n < 2 {
        return Vec::new();
    }

    // d has n-1 terms: d[0..n-2], indices 0..=n-2.
    let mut d = vec![0.0_f64; n - 1];
    // d[k] = d[k+2] + 2*(k+1)*c[k+1], for k = n-2 down to 0.
    for k in (0..n - 1).rev() {
        let d_k2 = if k + 2 <= n - 2 { d[k + 2] } else { 0.0 };
        d[k] = d_k2 + 2.0 * (k as f64 + 1.0) * coeffs[k + 1];
    }
    d
}

/// Evaluate the derivative (w.r.t. the normalized variable `x`) of the
/// Chebyshev series directly, without materializing the derivative
/// coefficient vector.
pub fn evaluate_derivative(coeffs: &[f64], x: f64) -> f64 {
    evaluate(&derivative_coeffs(coeffs), x)
}

/// Evaluate both the value and the derivative in one pass (shares the
/// derivative-coefficient computation).
pub fn evaluate_both(coeffs: &[f64], x: f64) -> (f64, f64) {
    (evaluate(coeffs, x), evaluate_derivative(coeffs, x))
}

/// Direct basis-expansion evaluation: `sum_k c_k * T_k(x)` computed via the
/// `T_k(cos theta) = cos(k*theta)` identity. Used only to cross-check
/// Clenshaw's recurrence in tests; not numerically preferable for
/// production use (loses stability for large `k` near `|x| = 1`).
#[cfg(test)]
fn evaluate_direct(coeffs: &[f64], x: f64) -> f64 {
    let theta = x.clamp(-1.0, 1.0).acos();
    coeffs
        .iter()
        .enumerate()
        .map(|(k, &c)| c * (k as f64 * theta).cos())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_coeffs_is_zero() {
        assert_eq!(evaluate(&[], 0.3), 0.0);
    }

    #[test]
    fn constant_series() {
        assert_eq!(evaluate(&[5.0], 0.9), 5.0);
    }

    #[test]
    fn matches_direct_expansion() {
        let coeffs = [1.0, -2.0, 0.5, 3.25, -1.1, 0.02];
        for i in 0..=20 {
            let x = -1.0 + 2.0 * i as f64 / 20.0;
            let a = evaluate(&coeffs, x);
            let b = evaluate_direct(&coeffs, x);
            assert!((a - b).abs() < 1e-9, "x={x}: clenshaw={a} direct={b}");
        }
    }

    #[test]
    fn derivative_of_linear_term_is_constant() {
        // T_0 = 1, T_1 = x -> series = c1 * x, derivative = c1.
        let coeffs = [0.0, 4.0];
        assert!((evaluate_derivative(&coeffs, 0.5) - 4.0).abs() < 1e-12);
        assert!((evaluate_derivative(&coeffs, -0.8) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn derivative_matches_numeric_difference() {
        let coeffs = [0.3, -1.2, 0.7, 2.1, -0.4];
        let h = 1e-6;
        for i in 1..10 {
            let x = -0.9 + 1.8 * i as f64 / 10.0;
            let numeric = (evaluate(&coeffs, x + h) - evaluate(&coeffs, x - h)) / (2.0 * h);
            let analytic = evaluate_derivative(&coeffs, x);
            assert!(
                (numeric - analytic).abs() < 1e-5,
                "x={x}: numeric={numeric} analytic={analytic}"
            );
        }
    }
}
