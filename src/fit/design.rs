//! Design matrix construction for the 2D monomial basis.
//!
//! The design matrix `A` has one row per basis term (in `SurfaceDegree::terms`
//! order) and one column per grid point (row-major over the meshgrid). Terms
//! above the total-order cap keep their row but it is all zeros.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::domain::{SurfaceDegree, Term};
use crate::error::{FitError, Result};
use crate::fit::fitter::validate_axes;
use crate::math::{meshgrid, monomial, ravel};

/// Flattened grid coordinates, one entry per grid point.
#[derive(Debug, Clone)]
pub(crate) struct GridPoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl GridPoints {
    pub fn new(xs: &[f64], ys: &[f64]) -> Self {
        let (x, y) = meshgrid(xs, ys);
        Self {
            x: ravel(&x),
            y: ravel(&y),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }
}

/// Build the design matrix `A` (terms × points) for the given axes.
///
/// Fails with `FitError::InvalidArgument` if a monomial overflows to a
/// non-finite value.
pub fn design_matrix(xs: &[f64], ys: &[f64], degree: &SurfaceDegree) -> Result<DMatrix<f64>> {
    validate_axes(xs, ys)?;
    build_design(&GridPoints::new(xs, ys), degree)
}

pub(crate) fn build_design(points: &GridPoints, degree: &SurfaceDegree) -> Result<DMatrix<f64>> {
    let terms: Vec<Term> = degree.terms().collect();
    let n = points.len();

    // Terms are independent; `collect` keeps them in enumeration order.
    let rows: Vec<Vec<f64>> = terms
        .par_iter()
        .map(|&term| {
            if degree.includes(term) {
                points
                    .x
                    .iter()
                    .zip(points.y.iter())
                    .map(|(&x, &y)| monomial(x, y, term))
                    .collect()
            } else {
                vec![0.0; n]
            }
        })
        .collect();

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    if flat.iter().any(|v| !v.is_finite()) {
        return Err(FitError::invalid(
            "design matrix overflowed: reduce kx/ky or rescale coordinates",
        ));
    }
    Ok(DMatrix::from_row_slice(terms.len(), n, &flat))
}
