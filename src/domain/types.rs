//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON
//! - reloaded later for evaluation or comparisons

use std::path::PathBuf;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};
use crate::math::monomial;

/// One basis term `x^i * y^j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    /// Exponent of `x`.
    pub i: usize,
    /// Exponent of `y`.
    pub j: usize,
}

impl Term {
    pub fn total_degree(self) -> usize {
        self.i + self.j
    }
}

/// Polynomial degree specification for one fit.
///
/// Terms are enumerated with the `y` exponent in the outer loop and the `x`
/// exponent in the inner loop:
///
/// ```text
/// k = j * (kx + 1) + i      for x^i * y^j, 0 <= i <= kx, 0 <= j <= ky
/// ```
///
/// so the coefficient vector reshaped row-major to `(ky + 1, kx + 1)` has the
/// same orientation as the observation grid (rows follow `y`, columns follow `x`).
///
/// When `order` is set, terms with `i + j > order` keep their slot but are
/// evaluated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceDegree {
    /// Maximum exponent of `x` (inclusive).
    pub kx: usize,
    /// Maximum exponent of `y` (inclusive).
    pub ky: usize,
    /// Optional cap on the total degree `i + j`.
    pub order: Option<usize>,
}

impl Default for SurfaceDegree {
    fn default() -> Self {
        Self {
            kx: 3,
            ky: 3,
            order: None,
        }
    }
}

impl SurfaceDegree {
    /// Validate signed degree parameters.
    ///
    /// Also rejects degrees whose term count does not fit in `usize`.
    pub fn new(kx: i64, ky: i64, order: Option<i64>) -> Result<Self> {
        let kx = non_negative("kx", kx)?;
        let ky = non_negative("ky", ky)?;
        let order = order.map(|o| non_negative("order", o)).transpose()?;
        let degree = Self { kx, ky, order };
        if degree.checked_term_count().is_none() {
            return Err(FitError::invalid(format!(
                "term count (kx + 1) * (ky + 1) overflows for kx={kx}, ky={ky}"
            )));
        }
        Ok(degree)
    }

    /// `(kx + 1) * (ky + 1)`, or `None` on overflow.
    pub fn checked_term_count(&self) -> Option<usize> {
        self.kx
            .checked_add(1)?
            .checked_mul(self.ky.checked_add(1)?)
    }

    /// Number of coefficient slots, `(kx + 1) * (ky + 1)`.
    ///
    /// Always representable for degrees built by `new`; use `checked_term_count`
    /// for hand-assembled values.
    pub fn term_count(&self) -> usize {
        (self.kx + 1) * (self.ky + 1)
    }

    /// Whether `term` survives the total-order cap.
    pub fn includes(&self, term: Term) -> bool {
        match self.order {
            Some(order) => term.total_degree() <= order,
            None => true,
        }
    }

    /// Basis terms in coefficient order.
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        let width = self.kx + 1;
        (0..self.term_count()).map(move |k| Term {
            i: k % width,
            j: k / width,
        })
    }

    /// Coefficient index of `x^i * y^j`, if it is inside the degree box.
    pub fn term_index(&self, i: usize, j: usize) -> Option<usize> {
        (i <= self.kx && j <= self.ky).then(|| j * (self.kx + 1) + i)
    }
}

fn non_negative(name: &str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| FitError::invalid(format!("{name} must be >= 0, got {value}")))
}

/// Result of a least-squares surface fit.
///
/// `coefficients.len() == degree.term_count()` for every fit produced by this
/// crate. Values deserialized or assembled by hand may break that; check with
/// `has_consistent_shape`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFit {
    pub degree: SurfaceDegree,
    /// One entry per term, in `SurfaceDegree::terms` order.
    pub coefficients: Vec<f64>,
    /// Residual sum of squares.
    ///
    /// `None` when the design is rank-deficient or has no more points than terms.
    pub residuals: Option<f64>,
    /// Numerical rank of the design matrix.
    pub rank: usize,
    /// Singular values of the design matrix, descending.
    pub singular_values: Vec<f64>,
}

impl SurfaceFit {
    /// Coefficient of `x^i * y^j`.
    pub fn coefficient(&self, i: usize, j: usize) -> Option<f64> {
        self.degree
            .term_index(i, j)
            .and_then(|k| self.coefficients.get(k).copied())
    }

    /// Whether there is exactly one coefficient per term.
    pub fn has_consistent_shape(&self) -> bool {
        self.degree.checked_term_count() == Some(self.coefficients.len())
    }

    /// Coefficients as a `(ky + 1) × (kx + 1)` matrix, entry `(j, i)` for `x^i * y^j`.
    ///
    /// `None` when the coefficient count does not match the degree.
    pub fn coefficient_grid(&self) -> Option<DMatrix<f64>> {
        self.has_consistent_shape().then(|| {
            DMatrix::from_row_slice(self.degree.ky + 1, self.degree.kx + 1, &self.coefficients)
        })
    }

    pub fn is_rank_deficient(&self) -> bool {
        self.rank < self.degree.term_count()
    }

    /// Ratio of the largest to the smallest singular value.
    ///
    /// `None` when the smallest singular value is zero.
    pub fn condition_number(&self) -> Option<f64> {
        let max = self.singular_values.first()?;
        let min = self.singular_values.last()?;
        (*min > 0.0).then(|| max / min)
    }

    /// Evaluate the fitted polynomial at a single point.
    ///
    /// Terms excluded by the total-order cap do not contribute. If the fit has
    /// fewer coefficients than terms, the missing ones count as zero.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.degree
            .terms()
            .zip(self.coefficients.iter())
            .filter(|(term, _)| self.degree.includes(*term))
            .map(|(term, c)| c * monomial(x, y, term))
            .sum()
    }

    /// Evaluate over the meshgrid of `xs` and `ys`.
    ///
    /// The result has shape `(len(ys), len(xs))`, the same layout as the fitted `z`.
    pub fn evaluate_grid(&self, xs: &[f64], ys: &[f64]) -> DMatrix<f64> {
        DMatrix::from_fn(ys.len(), xs.len(), |a, b| self.evaluate(xs[b], ys[a]))
    }
}

/// Serialized surface input used by the `surf` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceInput {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// Observations, one row per `ys` entry.
    pub z: Vec<Vec<f64>>,
}

/// Resolved run configuration (from CLI args).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub kx: i64,
    pub ky: i64,
    pub order: Option<i64>,
    pub export: Option<PathBuf>,
    pub verbose: bool,
}
