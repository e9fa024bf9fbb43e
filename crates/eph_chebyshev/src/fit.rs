//! Least-squares fitting of Chebyshev coefficients to sampled values.

use std::f64::consts::PI;

/// Fit `degree + 1` Chebyshev coefficients to `values` sampled at the
/// classical Chebyshev nodes returned by [`crate::nodes`] (`values.len()`
/// must equal `degree + 1`).
///
/// Uses the closed-form discrete-cosine-transform relation, which is exact
/// (to floating-point rounding) for the square case `N = degree + 1` since
/// the nodes are the roots of `T_N` and the fit coincides with
/// interpolation.
pub fn fit_at_nodes(values: &[f64], degree: usize) -> Vec<f64> {
    let n = degree + 1;
    assert_eq!(
        values.len(),
        n,
        "fit_at_nodes requires exactly degree+1 samples"
    );

    let mut coeffs = vec![0.0_f64; n];
    for (j, coeff) in coeffs.iter_mut().enumerate() {
        let scale = if j == 0 { 1.0 / n as f64 } else { 2.0 / n as f64 };
        let mut sum = 0.0;
        for (k, &y_k) in values.iter().enumerate() {
            let theta = PI * (2 * k + 1) as f64 * j as f64 / (2 * n) as f64;
            sum += y_k * theta.cos();
        }
        *coeff = scale * sum;
    }
    coeffs
}

/// Fit `degree + 1` Chebyshev coefficients to `(x, y)` pairs via ordinary
/// least squares over the Chebyshev basis, solved through the normal
/// equations `(T^T T) c = T^T y`. `xs.len()` must be `>= degree + 1` and
/// every `x` must lie in `[-1, 1]`.
///
/// Used when the sample count exceeds the node count (oversampled fits);
/// for the canonical `N = degree + 1` case [`fit_at_nodes`] is equivalent
/// and considerably cheaper.
pub fn fit_least_squares(xs: &[f64], ys: &[f64], degree: usize) -> Vec<f64> {
    assert_eq!(xs.len(), ys.len(), "xs and ys must be the same length");
    let n = degree + 1;
    assert!(xs.len() >= n, "need at least degree+1 samples");

    // Build the Chebyshev Vandermonde matrix T (xs.len() x n) via the
    // three-term recurrence T_0=1, T_1=x, T_k = 2x*T_{k-1} - T_{k-2}.
    let rows = xs.len();
    let mut basis = vec![vec![0.0_f64; n]; rows];
    for (row, &x) in basis.iter_mut().zip(xs.iter()) {
        row[0] = 1.0;
        if n > 1 {
            row[1] = x;
        }
        for k in 2..n {
            row[k] = 2.0 * x * row[k - 1] - row[k - 2];
        }
    }

    // Normal equations: a = T^T T (n x n), b = T^T y (n).
    let mut a = vec![vec![0.0_f64; n]; n];
    let mut b = vec![0.0_f64; n];
    for row_idx in 0..rows {
        for i in 0..n {
            b[i] += basis[row_idx][i] * ys[row_idx];
            for j in 0..n {
                a[i][j] += basis[row_idx][i] * basis[row_idx][j];
            }
        }
    }

    solve_linear_system(a, b)
}

/// Solve `a * x = b` via Gaussian elimination with partial pivoting.
fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Vec<f64> {
    let n = b.len();
    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&r1, &r2| a[r1][col].abs().total_cmp(&a[r2][col].abs()))
            .unwrap();
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        let pivot = a[col][col];
        assert!(pivot.abs() > 1e-300, "singular Chebyshev normal-equation matrix");

        for row in (col + 1)..n {
            let factor = a[row][col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0_f64; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in (row + 1)..n {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }
    x
}
