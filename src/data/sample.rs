//! Synthetic surface generation for demos and smoke runs.
//!
//! Two generators:
//!
//! - `random_surface`: uniform integer observations in `1..=255` on integer
//!   coordinates (no underlying polynomial; the fit is a pure smoother)
//! - `polynomial_surface`: a known random polynomial on `[-1, 1]²` with
//!   optional Gaussian noise, so the fit can be compared against the truth
//!
//! Both are deterministic given the seed.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{SurfaceDegree, SurfaceFit, SurfaceInput};
use crate::error::{FitError, Result};

/// A generated surface with its ground-truth coefficients.
#[derive(Debug, Clone)]
pub struct SyntheticSurface {
    pub input: SurfaceInput,
    pub degree: SurfaceDegree,
    /// In `SurfaceDegree::terms` order; excluded terms are zero.
    pub coefficients: Vec<f64>,
    pub noise_sigma: f64,
}

/// Uniform random integers in `1..=255` on the grid `0..nx` × `0..ny`.
pub fn random_surface(nx: usize, ny: usize, seed: u64) -> Result<SurfaceInput> {
    check_grid_size(nx, ny)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let xs: Vec<f64> = (0..nx).map(|b| b as f64).collect();
    let ys: Vec<f64> = (0..ny).map(|a| a as f64).collect();
    let z: Vec<Vec<f64>> = (0..ny)
        .map(|_| {
            (0..nx)
                .map(|_| f64::from(rng.gen_range(1u8..=255)))
                .collect::<Vec<f64>>()
        })
        .collect();

    Ok(SurfaceInput { xs, ys, z })
}

/// Random polynomial of the given degree, sampled on an evenly spaced grid.
///
/// Coefficients are standard normal; terms above the degree's order cap are zero.
pub fn polynomial_surface(
    nx: usize,
    ny: usize,
    degree: SurfaceDegree,
    noise_sigma: f64,
    seed: u64,
) -> Result<SyntheticSurface> {
    check_grid_size(nx, ny)?;
    if !(noise_sigma.is_finite() && noise_sigma >= 0.0) {
        return Err(FitError::invalid(format!(
            "noise sigma must be finite and >= 0, got {noise_sigma}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let coeff_dist = Normal::new(0.0, 1.0)
        .map_err(|e| FitError::invalid(format!("coefficient distribution error: {e}")))?;
    let noise_dist = Normal::new(0.0, noise_sigma)
        .map_err(|e| FitError::invalid(format!("noise distribution error: {e}")))?;

    let coefficients: Vec<f64> = degree
        .terms()
        .map(|t| {
            if degree.includes(t) {
                coeff_dist.sample(&mut rng)
            } else {
                0.0
            }
        })
        .collect();

    let xs = unit_axis(nx);
    let ys = unit_axis(ny);

    let truth = SurfaceFit {
        degree,
        coefficients: coefficients.clone(),
        residuals: None,
        rank: degree.term_count(),
        singular_values: Vec::new(),
    };

    let z: Vec<Vec<f64>> = ys
        .iter()
        .map(|&y| {
            xs.iter()
                .map(|&x| {
                    let noise = if noise_sigma > 0.0 {
                        noise_dist.sample(&mut rng)
                    } else {
                        0.0
                    };
                    truth.evaluate(x, y) + noise
                })
                .collect::<Vec<f64>>()
        })
        .collect();

    Ok(SyntheticSurface {
        input: SurfaceInput { xs, ys, z },
        degree,
        coefficients,
        noise_sigma,
    })
}

fn check_grid_size(nx: usize, ny: usize) -> Result<()> {
    if nx == 0 || ny == 0 {
        return Err(FitError::invalid(format!(
            "grid size must be > 0 on both axes, got {nx}x{ny}"
        )));
    }
    Ok(())
}

/// `n` evenly spaced points on `[-1, 1]` (just `0` when `n == 1`).
fn unit_axis(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }
    (0..n)
        .map(|k| -1.0 + 2.0 * k as f64 / (n as f64 - 1.0))
        .collect()
}
