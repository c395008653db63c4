//! Grid helpers: meshgrid expansion and row-major flattening.
//!
//! Layout convention ("xy" indexing): a grid built from `xs` (length `N`) and
//! `ys` (length `M`) has shape `M × N`, with `x` varying along columns and `y`
//! along rows. Flattening is row-major, so point `a * N + b` is `(xs[b], ys[a])`.

use nalgebra::DMatrix;

use crate::error::{FitError, Result};

/// Expand coordinate axes into `(X, Y)` grids of shape `(len(ys), len(xs))`.
pub fn meshgrid(xs: &[f64], ys: &[f64]) -> (DMatrix<f64>, DMatrix<f64>) {
    let x = DMatrix::from_fn(ys.len(), xs.len(), |_, b| xs[b]);
    let y = DMatrix::from_fn(ys.len(), xs.len(), |a, _| ys[a]);
    (x, y)
}

/// Flatten a matrix in row-major order.
///
/// `DMatrix` stores columns contiguously, so this walks rows explicitly.
pub fn ravel(m: &DMatrix<f64>) -> Vec<f64> {
    let mut out = Vec::with_capacity(m.len());
    for row in m.row_iter() {
        out.extend(row.iter().copied());
    }
    out
}

/// Build a matrix from nested rows, rejecting ragged input.
///
/// `expected` is the `(rows, cols)` shape the caller needs; any deviation is a
/// `FitError::Shape`.
pub fn matrix_from_rows(rows: &[Vec<f64>], expected: (usize, usize)) -> Result<DMatrix<f64>> {
    let (n_rows, n_cols) = expected;
    if rows.len() != n_rows {
        let found_cols = rows.first().map(Vec::len).unwrap_or(0);
        return Err(FitError::Shape {
            expected,
            found: (rows.len(), found_cols),
        });
    }
    if let Some(bad) = rows.iter().find(|r| r.len() != n_cols) {
        return Err(FitError::Shape {
            expected,
            found: (rows.len(), bad.len()),
        });
    }
    Ok(DMatrix::from_fn(n_rows, n_cols, |a, b| rows[a][b]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meshgrid_uses_xy_indexing() {
        let (x, y) = meshgrid(&[1.0, 2.0, 3.0], &[10.0, 20.0]);
        assert_eq!(x.shape(), (2, 3));
        assert_eq!(y.shape(), (2, 3));
        assert_eq!(x[(1, 2)], 3.0);
        assert_eq!(y[(1, 2)], 20.0);
        assert_eq!(x[(0, 0)], 1.0);
        assert_eq!(y[(0, 2)], 10.0);
    }

    #[test]
    fn ravel_is_row_major() {
        let m = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(ravel(&m), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn ragged_rows_are_a_shape_error() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = matrix_from_rows(&rows, (2, 2)).unwrap_err();
        assert_eq!(
            err,
            FitError::Shape {
                expected: (2, 2),
                found: (2, 1)
            }
        );

        let err = matrix_from_rows(&rows, (3, 2)).unwrap_err();
        assert!(matches!(err, FitError::Shape { found: (2, 2), .. }));

        let ok = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]], (2, 2)).unwrap();
        assert_eq!(ok[(1, 0)], 3.0);
    }
}
