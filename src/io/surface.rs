//! Read/write surface JSON files.
//!
//! Schema (`domain::SurfaceInput`):
//!
//! ```json
//! { "xs": [0.0, 1.0, 2.0], "ys": [0.0, 1.0], "z": [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]] }
//! ```
//!
//! `z` has one row per `ys` entry and one column per `xs` entry.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nalgebra::DMatrix;

use crate::domain::SurfaceInput;
use crate::error::{FitError, Result};
use crate::math::matrix_from_rows;

/// Read a surface JSON file.
pub fn read_surface_json(path: &Path) -> Result<SurfaceInput> {
    let file = File::open(path).map_err(|e| {
        FitError::io(format!("Failed to open surface JSON '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| FitError::io(format!("Invalid surface JSON '{}': {e}", path.display())))
}

/// Write a surface JSON file.
pub fn write_surface_json(path: &Path, input: &SurfaceInput) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        FitError::io(format!("Failed to create surface JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, input)
        .map_err(|e| FitError::io(format!("Failed to write surface JSON: {e}")))
}

/// Observations as a `len(ys) × len(xs)` matrix.
///
/// Ragged or mis-sized rows are a `FitError::Shape`.
pub fn surface_matrix(input: &SurfaceInput) -> Result<DMatrix<f64>> {
    matrix_from_rows(&input.z, (input.ys.len(), input.xs.len()))
}
