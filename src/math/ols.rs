//! Least squares solver.
//!
//! We solve problems of the form:
//!
//! ```text
//! minimize ‖X β - y‖²
//! ```
//!
//! Implementation choices:
//! - SVD handles tall, square, and wide design matrices alike, and keeps
//!   working when columns are linearly dependent.
//! - Non-finite entries are rejected up front: the SVD iteration does not
//!   terminate on them.
//! - Singular values at or below `ε · max(rows, cols) · σ_max` are treated as
//!   zero. The same cutoff defines the numerical rank, and the solve returns the
//!   minimum-norm solution when the matrix is rank-deficient.
//! - A structurally zero column therefore gets a zero coefficient.

use nalgebra::{DMatrix, DVector};

use crate::error::{FitError, Result};

/// Output of a least squares solve.
#[derive(Debug, Clone)]
pub struct LeastSquares {
    pub beta: DVector<f64>,
    /// `‖X β - y‖²`, only when `X` has full column rank and more rows than columns.
    pub residuals: Option<f64>,
    pub rank: usize,
    /// Descending.
    pub singular_values: Vec<f64>,
}

/// Cutoff below which singular values are treated as zero.
pub fn rank_tolerance(rows: usize, cols: usize, sigma_max: f64) -> f64 {
    f64::EPSILON * rows.max(cols) as f64 * sigma_max
}

/// Solve a least squares problem using SVD.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<LeastSquares> {
    let (rows, cols) = x.shape();
    if y.len() != rows {
        return Err(FitError::Shape {
            expected: (rows, 1),
            found: (y.len(), 1),
        });
    }

    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(FitError::invalid("least squares input contains non-finite values"));
    }

    let svd = x.clone().svd(true, true);

    let mut singular_values: Vec<f64> = svd.singular_values.iter().copied().collect();
    singular_values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let sigma_max = singular_values.first().copied().unwrap_or(0.0);
    let tol = rank_tolerance(rows, cols, sigma_max);

    let rank = svd.rank(tol);
    let beta = svd
        .solve(y, tol)
        .map_err(|e| FitError::invalid(format!("least squares solve failed: {e}")))?;

    let residuals = if rank == cols && rows > cols {
        Some((x * &beta - y).norm_squared())
    } else {
        None
    };

    Ok(LeastSquares {
        beta,
        residuals,
        rank,
        singular_values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let sol = solve_least_squares(&x, &y).unwrap();
        assert!((sol.beta[0] - 2.0).abs() < 1e-10);
        assert!((sol.beta[1] - 3.0).abs() < 1e-10);
        assert_eq!(sol.rank, 2);
        assert!(sol.residuals.unwrap() < 1e-20);
        assert_eq!(sol.singular_values.len(), 2);
        assert!(sol.singular_values[0] >= sol.singular_values[1]);
    }

    #[test]
    fn residuals_report_misfit() {
        // Constant model on [0, 2]: best fit is 1 with SSE 2.
        let x = DMatrix::from_row_slice(2, 1, &[1.0, 1.0]);
        let y = DVector::from_row_slice(&[0.0, 2.0]);
        let sol = solve_least_squares(&x, &y).unwrap();
        assert!((sol.beta[0] - 1.0).abs() < 1e-12);
        assert!((sol.residuals.unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_column_gets_minimum_norm_solution() {
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
        let y = DVector::from_row_slice(&[4.0, 4.0, 4.0]);

        let sol = solve_least_squares(&x, &y).unwrap();
        assert_eq!(sol.rank, 1);
        assert!(sol.residuals.is_none());
        assert!((sol.beta[0] - 4.0).abs() < 1e-12);
        assert!(sol.beta[1].abs() < 1e-12);
        assert!(sol.singular_values[1].abs() < 1e-12);
    }

    #[test]
    fn wide_system_is_solved_without_residuals() {
        // One equation, two unknowns: minimum-norm solution of a + b = 2 is (1, 1).
        let x = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        let y = DVector::from_row_slice(&[2.0]);
        let sol = solve_least_squares(&x, &y).unwrap();
        assert_eq!(sol.rank, 1);
        assert!(sol.residuals.is_none());
        assert!((sol.beta[0] - 1.0).abs() < 1e-12);
        assert!((sol.beta[1] - 1.0).abs() < 1e-12);
        assert_eq!(sol.singular_values.len(), 1);
    }

    #[test]
    fn non_finite_entries_are_rejected_before_svd() {
        let x = DMatrix::from_row_slice(2, 1, &[1.0, f64::INFINITY]);
        let y = DVector::from_row_slice(&[1.0, 2.0]);
        assert!(matches!(
            solve_least_squares(&x, &y),
            Err(FitError::InvalidArgument(_))
        ));

        let x = DMatrix::from_row_slice(2, 1, &[1.0, 1.0]);
        let y = DVector::from_row_slice(&[1.0, f64::NAN]);
        assert!(matches!(
            solve_least_squares(&x, &y),
            Err(FitError::InvalidArgument(_))
        ));
    }

    #[test]
    fn mismatched_target_length_is_rejected() {
        let x = DMatrix::from_row_slice(2, 1, &[1.0, 1.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            solve_least_squares(&x, &y),
            Err(FitError::Shape { .. })
        ));
    }
}
