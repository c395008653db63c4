//! Surface fitting orchestration.
//!
//! Responsibilities:
//!
//! - validate axes, observations, and degree parameters
//! - build the monomial design matrix (parallel over terms)
//! - solve the least-squares system and package the diagnostics

pub mod design;
pub mod fitter;

pub use design::design_matrix;
pub use fitter::*;
