//! Export a fit result to JSON.
//!
//! The export carries the degree, coefficients, and solver diagnostics, plus the
//! coefficient layout so downstream scripts can reshape without guessing.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::domain::{SurfaceFit, Term};
use crate::error::{FitError, Result};

#[derive(Debug, Serialize)]
struct FitExport<'a> {
    tool: &'static str,
    /// `[rows, cols]` of the coefficient grid, i.e. `[ky + 1, kx + 1]`.
    coefficient_shape: [usize; 2],
    terms: Vec<Term>,
    fit: &'a SurfaceFit,
}

/// Write a fit result as pretty JSON.
pub fn write_fit_json(path: &Path, fit: &SurfaceFit) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| FitError::io(format!("Failed to create fit JSON '{}': {e}", path.display())))?;

    let export = FitExport {
        tool: "surf",
        coefficient_shape: [fit.degree.ky + 1, fit.degree.kx + 1],
        terms: fit.degree.terms().collect(),
        fit,
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| FitError::io(format!("Failed to write fit JSON: {e}")))
}
