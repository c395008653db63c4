//! Least-squares fit of a 2D polynomial surface.
//!
//! Given:
//! - coordinate axes `xs` (length `N`) and `ys` (length `M`)
//! - observations `z` of shape `M × N` (rows follow `ys`)
//! - a degree specification (`kx`, `ky`, optional total-order cap)
//!
//! we build the design matrix `A` over the meshgrid, solve
//! `minimize ‖Aᵗ c - ravel(z)‖²` by SVD, and return the coefficients together
//! with the solver diagnostics.

use nalgebra::{DMatrix, DVector};

use crate::domain::{SurfaceDegree, SurfaceFit};
use crate::error::{FitError, Result};
use crate::fit::design::{GridPoints, build_design};
use crate::math::{ravel, solve_least_squares};

/// Fit a polynomial surface from signed degree parameters.
///
/// Negative `kx`, `ky`, or `order` is rejected with `FitError::InvalidArgument`
/// before any work is done.
pub fn fit(
    xs: &[f64],
    ys: &[f64],
    z: &DMatrix<f64>,
    kx: i64,
    ky: i64,
    order: Option<i64>,
) -> Result<SurfaceFit> {
    let degree = SurfaceDegree::new(kx, ky, order)?;
    fit_surface(xs, ys, z, degree)
}

/// Fit a polynomial surface for an already validated degree.
pub fn fit_surface(
    xs: &[f64],
    ys: &[f64],
    z: &DMatrix<f64>,
    degree: SurfaceDegree,
) -> Result<SurfaceFit> {
    validate_axes(xs, ys)?;

    let expected = (ys.len(), xs.len());
    if z.shape() != expected {
        return Err(FitError::Shape {
            expected,
            found: z.shape(),
        });
    }
    if z.iter().any(|v| !v.is_finite()) {
        return Err(FitError::invalid("z contains non-finite values"));
    }

    let points = GridPoints::new(xs, ys);
    let design = build_design(&points, &degree)?;
    let target = DVector::from_vec(ravel(z));

    let sol = solve_least_squares(&design.transpose(), &target)?;

    Ok(SurfaceFit {
        degree,
        coefficients: sol.beta.iter().copied().collect(),
        residuals: sol.residuals,
        rank: sol.rank,
        singular_values: sol.singular_values,
    })
}

pub(crate) fn validate_axes(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.is_empty() {
        return Err(FitError::invalid("xs must not be empty"));
    }
    if ys.is_empty() {
        return Err(FitError::invalid("ys must not be empty"));
    }
    if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
        return Err(FitError::invalid("coordinates must be finite"));
    }
    Ok(())
}
