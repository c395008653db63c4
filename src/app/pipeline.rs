//! Shared "fit pipeline" logic used by both subcommands.
//!
//! input surface -> shape check -> fit -> grid errors
//!
//! The subcommands then focus on where the surface comes from and what gets printed.

use nalgebra::DMatrix;

use crate::domain::{FitConfig, SurfaceFit, SurfaceInput};
use crate::error::Result;
use crate::fit::fit;
use crate::io::surface_matrix;
use crate::report::{SurfaceErrors, surface_errors};

/// All computed outputs of a single fit run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub z: DMatrix<f64>,
    pub fit: SurfaceFit,
    pub errors: SurfaceErrors,
}

/// Execute the fit for one surface and return the computed outputs.
pub fn run_fit(input: &SurfaceInput, config: &FitConfig) -> Result<RunOutput> {
    let z = surface_matrix(input)?;
    let fit = fit(&input.xs, &input.ys, &z, config.kx, config.ky, config.order)?;
    let errors = surface_errors(&fit, &input.xs, &input.ys, &z);

    if config.verbose {
        eprintln!(
            "surf: grid {}x{} ({} points), {} terms, rank {}",
            input.ys.len(),
            input.xs.len(),
            errors.n_points,
            fit.degree.term_count(),
            fit.rank
        );
        if fit.is_rank_deficient() {
            eprintln!("surf: design matrix is rank-deficient; minimum-norm solution returned");
        }
    }

    Ok(RunOutput { z, fit, errors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitError;

    fn config(kx: i64, ky: i64, order: Option<i64>) -> FitConfig {
        FitConfig {
            kx,
            ky,
            order,
            export: None,
            verbose: false,
        }
    }

    #[test]
    fn run_fit_on_plane() {
        let input = SurfaceInput {
            xs: vec![0.0, 1.0, 2.0],
            ys: vec![0.0, 1.0, 2.0],
            z: (0..3)
                .map(|a| {
                    (0..3)
                        .map(|b| 2.0 + 3.0 * b as f64 + 5.0 * a as f64)
                        .collect::<Vec<f64>>()
                })
                .collect(),
        };
        let out = run_fit(&input, &config(1, 1, None)).unwrap();
        assert_eq!(out.fit.rank, 4);
        assert!(out.errors.max_abs < 1e-10);
        assert_eq!(out.z.shape(), (3, 3));
    }

    #[test]
    fn run_fit_propagates_shape_error() {
        let input = SurfaceInput {
            xs: vec![0.0, 1.0],
            ys: vec![0.0, 1.0],
            z: vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
        };
        let err = run_fit(&input, &config(1, 1, None)).unwrap_err();
        assert!(matches!(err, FitError::Shape { .. }));
    }
}
